//! Pattern store and matcher
//!
//! Loads the ordered (pattern, response) pairs backing the assistant and
//! scans them against user queries.

pub mod matcher;
pub mod store;

pub use matcher::{match_query, normalize, MatchOutcome, MIN_QUERY_LEN};
pub use store::{load_patterns, PatternEntry, PatternStoreError};
