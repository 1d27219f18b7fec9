//! Commit identifiers
//!
//! A commit identifier is a short hash string naming an immutable snapshot.
//! It is derived from the sorted staged `(filename, content)` pairs, so two
//! snapshots with the same file names but different contents produce
//! distinct identifiers. Byte-identical snapshots still collide.
//!
//! ## Format
//!
//! 8 lowercase hexadecimal characters (e.g. `"a1b2c3d4"`). Identifiers are
//! used directly as directory names under the commit store, so parsing
//! doubles as path-safety validation.

use sha1::{Digest, Sha1};

/// Length of a commit identifier in hexadecimal characters
pub const COMMIT_ID_LENGTH: usize = 8;

/// Commit identifier (truncated SHA-1 hash)
///
/// An 8-character hexadecimal string naming one immutable commit snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Derive the identifier for a staged snapshot
    ///
    /// # Arguments
    ///
    /// * `snapshot` - staged files as `(name, content)` pairs, sorted by name
    ///
    /// # Returns
    ///
    /// The first 8 hex characters of the SHA-1 over all names and contents.
    /// Names and contents are separated by NUL bytes so that the pair
    /// boundaries are unambiguous.
    pub fn derive(snapshot: &[(String, Vec<u8>)]) -> Self {
        let mut hasher = Sha1::new();

        for (name, content) in snapshot {
            hasher.update(name.as_bytes());
            hasher.update(b"\0");
            hasher.update(content);
            hasher.update(b"\0");
        }

        let digest = hasher.finalize();
        let hex40 = format!("{digest:x}");

        CommitId(hex40[..COMMIT_ID_LENGTH].to_string())
    }

    /// Parse and validate a commit identifier from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 8-character lowercase hexadecimal string
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != COMMIT_ID_LENGTH {
            anyhow::bail!("invalid commit identifier length: {}", id.len());
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()) {
            anyhow::bail!("invalid commit identifier characters: {}", id);
        }

        Ok(Self(id))
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
