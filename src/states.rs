use chrono::{DateTime, Utc};

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// The only process-wide value is the moment the service started.
///
/// It is captured once in `main` and cloned into every handler by Axum's
/// `State` extractor. Nothing mutates it afterwards, so there is no lock:
/// `DateTime<Utc>` is `Copy` and each request just reads its own copy.
///
/// Tests build their own `AppState` with a fixed start time instead of
/// touching a global.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new() -> Self {
        Self::started_at(Utc::now())
    }

    pub fn started_at(started_at: DateTime<Utc>) -> Self {
        Self { started_at }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
