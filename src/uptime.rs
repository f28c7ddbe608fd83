use chrono::{DateTime, SecondsFormat, Utc};

/// Time since start, in whole seconds and as "H hour(s), M minute(s)"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uptime {
    pub seconds: u64,
    pub human: String,
}

/// Derive uptime from the start time and the current clock reading.
///
/// Seconds are truncated, never rounded. A clock that reads earlier than
/// `started_at` yields zero.
pub fn uptime(started_at: DateTime<Utc>, now: DateTime<Utc>) -> Uptime {
    let seconds = (now - started_at).num_seconds().max(0) as u64;
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    Uptime {
        seconds,
        human: format!(
            "{} {}, {} {}",
            hours,
            plural(hours, "hour"),
            minutes,
            plural(minutes, "minute")
        ),
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        unit.to_string()
    } else {
        format!("{}s", unit)
    }
}

/// RFC 3339 at whole-second precision, e.g. `2024-01-31T09:15:00Z`
pub fn rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}
