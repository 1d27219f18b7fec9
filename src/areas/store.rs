//! Content store and commit log
//!
//! Committed snapshots live under the commits directory, one immutable
//! subdirectory per commit identifier. Each subdirectory holds the committed
//! files plus a `metadata.json` record (message, timestamp, file list).
//!
//! Snapshots are immutable once written. The one exception is an identifier
//! collision: two byte-identical staged sets derive the same identifier, and
//! the second commit overwrites the first's directory with the same content.
//!
//! `log()` returns commits in ascending identifier-sort order, not creation
//! order; identifiers are content hashes, not sequence numbers.

use crate::artifacts::commit_id::CommitId;
use crate::artifacts::diff::Snapshot;
use crate::artifacts::metadata::{CommitMetadata, METADATA_FILE_NAME};
use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};

/// The ordered collection of immutable commit snapshots
#[derive(Debug, new)]
pub struct CommitStore {
    /// Path to the commits directory (typically `.jot/commits`)
    path: Box<Path>,
}

impl CommitStore {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding one commit's snapshot and metadata
    pub fn commit_path(&self, id: &CommitId) -> PathBuf {
        self.path.join(id.as_ref())
    }

    pub fn contains(&self, id: &CommitId) -> bool {
        self.commit_path(id).is_dir()
    }

    /// Create the directory for a new commit
    pub fn create_commit_dir(&self, id: &CommitId) -> anyhow::Result<PathBuf> {
        let path = self.commit_path(id);
        std::fs::create_dir_all(&path)
            .with_context(|| format!("failed to create commit directory {:?}", path))?;

        Ok(path)
    }

    /// Write the metadata record into a commit directory
    pub fn write_metadata(&self, id: &CommitId, metadata: &CommitMetadata) -> anyhow::Result<()> {
        let path = self.commit_path(id).join(METADATA_FILE_NAME);
        let json = serde_json::to_string_pretty(metadata)
            .context("failed to serialize commit metadata")?;

        std::fs::write(&path, json)
            .with_context(|| format!("failed to write commit metadata {:?}", path))?;

        Ok(())
    }

    /// Read the metadata record of an existing commit
    ///
    /// A commit directory without a metadata record is a fatal error.
    pub fn read_metadata(&self, id: &CommitId) -> anyhow::Result<CommitMetadata> {
        let path = self.commit_path(id).join(METADATA_FILE_NAME);
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("commit metadata not found at {:?}", path))?;

        serde_json::from_str(&json)
            .with_context(|| format!("failed to parse commit metadata {:?}", path))
    }

    /// All commits with their metadata, in ascending identifier-sort order
    pub fn log(&self) -> anyhow::Result<Vec<(CommitId, CommitMetadata)>> {
        let mut ids = std::fs::read_dir(&self.path)
            .with_context(|| format!("failed to read commits directory {:?}", self.path))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .map(|entry| CommitId::try_parse(entry.file_name().to_string_lossy().to_string()))
            .collect::<anyhow::Result<Vec<_>>>()?;
        ids.sort();

        ids.into_iter()
            .map(|id| {
                let metadata = self.read_metadata(&id)?;
                Ok((id, metadata))
            })
            .collect()
    }

    /// Load a commit's snapshot as `(name -> content)` pairs
    ///
    /// `None` (an unborn branch) resolves to the empty snapshot. The
    /// metadata record is not part of the snapshot.
    pub fn snapshot(&self, id: Option<&CommitId>) -> anyhow::Result<Snapshot> {
        let Some(id) = id else {
            return Ok(Snapshot::new());
        };

        let commit_path = self.commit_path(id);
        if !commit_path.is_dir() {
            anyhow::bail!("commit {} not found in the store", id);
        }

        std::fs::read_dir(&commit_path)
            .with_context(|| format!("failed to read commit directory {:?}", commit_path))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .filter(|name| name != METADATA_FILE_NAME)
            .map(|name| {
                let path = commit_path.join(&name);
                let content = std::fs::read(&path)
                    .with_context(|| format!("failed to read committed file {:?}", path))?;
                Ok((name, content))
            })
            .collect()
    }
}
