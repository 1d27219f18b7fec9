//! Per-commit metadata record
//!
//! Every commit directory carries a `metadata.json` record next to the
//! committed files.
//!
//! ## Format
//!
//! ```json
//! {
//!   "message": "initial commit",
//!   "timestamp": "2026-08-23T10:15:30+02:00",
//!   "files": ["1.txt", "a.txt"]
//! }
//! ```
//!
//! The record must round-trip: writing and reading it back reproduces
//! identical values for every commit.

use serde::{Deserialize, Serialize};

/// Name of the metadata record inside a commit directory
pub const METADATA_FILE_NAME: &str = "metadata.json";

/// Metadata recorded for one commit
///
/// The message is free-form and may be empty. The file list is the sorted
/// set of names present in the commit's snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitMetadata {
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::FixedOffset>,
    pub files: Vec<String>,
}

impl CommitMetadata {
    /// Create a metadata record with the current local timestamp
    pub fn new(message: String, files: Vec<String>) -> Self {
        CommitMetadata {
            message,
            timestamp: chrono::Local::now().fixed_offset(),
            files,
        }
    }

    /// First line of the commit message, for one-line displays
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    /// Format the timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }
}
