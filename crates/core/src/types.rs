/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Ordering key among sibling menus.
pub type SortKey = i32;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
