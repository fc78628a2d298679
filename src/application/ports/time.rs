use chrono::{DateTime, Utc};

/// Source of "now" for timestamps written by the use cases.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
