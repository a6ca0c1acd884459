/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Business dates (borrow, return, receipt) carry no time-of-day.
pub type BusinessDate = chrono::NaiveDate;
