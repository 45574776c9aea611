use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Photo listings cap out here unless the caller asks for a different limit.
pub const DEFAULT_PHOTO_LIST_LIMIT: i64 = 100;
