//! Time utilities

use chrono::{DateTime, Utc};

/// Get current UTC time
///
/// Truncated to whole microseconds, the resolution PostgreSQL keeps for
/// `TIMESTAMPTZ`, so values read back compare equal to what was written.
pub fn now_utc() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_micros(now.timestamp_micros()).unwrap_or(now)
}
