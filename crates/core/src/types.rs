/// Content-service item identifiers. The service may hand back integer
/// or UUID primary keys; both are carried as strings locally.
pub type ItemId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
