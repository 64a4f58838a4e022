/// Per-table identifiers, assigned from a monotonically increasing counter.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
