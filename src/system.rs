use std::{env::consts, thread};

use tracing::debug;

use crate::dto::System;

/// Version of the rustc that compiled this binary, e.g. `1.90.0`
pub fn rust_version() -> String {
    rustc_version_runtime::version().to_string()
}

/// Collect facts about the host this process runs on.
///
/// Host name lookup is best-effort: a failure is logged at debug level and
/// reported as an empty string rather than failing the request.
pub fn system_info() -> System {
    let hostname = match hostname::get() {
        Ok(name) => name.to_string_lossy().into_owned(),
        Err(e) => {
            debug!("Hostname lookup failed: {}", e);
            String::new()
        }
    };

    System {
        hostname,
        platform: consts::OS.to_string(),
        platform_version: format!("{} {}", consts::OS, consts::ARCH),
        architecture: consts::ARCH.to_string(),
        cpu_count: cpu_count(),
        rust_version: rust_version(),
    }
}

/// Logical CPUs available to this process, never less than one
fn cpu_count() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
