mod responses;

pub use responses::*;
