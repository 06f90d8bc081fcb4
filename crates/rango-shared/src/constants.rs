//! Application-wide constants

/// Maximum length of a category name.
pub const NAME_MAX_LENGTH: u64 = 128;

/// Maximum length of a page title.
pub const TITLE_MAX_LENGTH: u64 = 128;

/// How many categories/pages the home view lists.
pub const TOP_ITEMS_LIMIT: i64 = 5;

/// Session key holding the distinct-day visit count.
pub const SESSION_KEY_VISITS: &str = "visits";

/// Session key holding the RFC 3339 timestamp of the last counted visit.
pub const SESSION_KEY_LAST_VISIT: &str = "last_visit";
