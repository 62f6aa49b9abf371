/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Role deadlines are calendar dates with no time component.
pub type Deadline = chrono::NaiveDate;
