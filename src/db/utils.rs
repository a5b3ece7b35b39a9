//! Database utility functions.

use chrono::{DateTime, Utc};

/// Current time used for all timestamp stamping.
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}
