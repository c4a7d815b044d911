//! Interaction log
//!
//! Append-only record of (query, response) pairs for one session,
//! exportable as comma-separated text.

use crate::session::models::InteractionRow;
use serde::{Deserialize, Serialize};

/// Header row emitted by [`InteractionLog::to_csv`]
pub const CSV_HEADER: &str = "user_query,assistant_response";

/// Append-only table of (query, response) pairs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InteractionLog {
    rows: Vec<InteractionRow>,
}

impl InteractionLog {
    /// Create an empty log
    #[allow(dead_code)] // Exercised from tests and external callers
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row to the end of the log
    pub fn append(&mut self, user_query: impl Into<String>, assistant_response: impl Into<String>) {
        self.rows.push(InteractionRow {
            user_query: user_query.into(),
            assistant_response: assistant_response.into(),
        });
    }

    /// All rows in insertion order
    pub fn rows(&self) -> &[InteractionRow] {
        &self.rows
    }

    /// Number of logged interactions
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the log is empty
    #[allow(dead_code)] // Exercised from tests and external callers
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Serialize the log as comma-separated text
    ///
    /// Emits the `user_query,assistant_response` header followed by one row
    /// per interaction in insertion order. Fields containing commas, quotes,
    /// or line breaks are double-quoted with embedded quotes doubled.
    pub fn to_csv(&self) -> String {
        let mut out = String::from(CSV_HEADER);
        out.push('\n');
        for row in &self.rows {
            out.push_str(&escape_field(&row.user_query));
            out.push(',');
            out.push_str(&escape_field(&row.assistant_response));
            out.push('\n');
        }
        out
    }
}

/// Quote a field if it contains a delimiter, quote, or line break
fn escape_field(field: &str) -> String {
    if field.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
