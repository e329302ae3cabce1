/// Event and inquiry identifiers are opaque strings (seed data uses `"1"`..`"4"`,
/// new records use time-ordered UUIDs).
pub type EventId = String;

/// Whole-dollar amounts. Goals and raised totals are never negative.
pub type Money = u64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates without a time component.
pub type Date = chrono::NaiveDate;
