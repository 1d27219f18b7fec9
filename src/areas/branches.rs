//! Branch table
//!
//! Branches are named pointers, each referencing exactly one commit
//! identifier. They are stored one file per branch under the branches
//! directory; the file's entire content is the bound commit identifier, or
//! the sentinel `0` for a branch that has not seen a commit yet (*unborn*).
//!
//! Exactly one branch (`main`) is active: it is created on init and advanced
//! automatically by every commit. Branch creation copies the active branch's
//! current pointer. There is no branch deletion and no checkout; the active
//! pointer never moves backward.

use crate::artifacts::branch_name::BranchName;
use crate::artifacts::commit_id::CommitId;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

/// Name of the single branch that receives automatic updates on commit
pub const ACTIVE_BRANCH: &str = "main";

/// Pointer value of a branch with no commits yet
pub const UNBORN_SENTINEL: &str = "0";

/// A branch pointer: either unborn or bound to a commit in the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchPointer {
    /// No commit has been made while this branch was active
    Unborn,
    /// Bound to a commit identifier present in the commit store
    Bound(CommitId),
}

impl BranchPointer {
    fn try_parse(content: &str) -> anyhow::Result<Self> {
        if content == UNBORN_SENTINEL {
            Ok(BranchPointer::Unborn)
        } else {
            Ok(BranchPointer::Bound(CommitId::try_parse(
                content.to_string(),
            )?))
        }
    }

    pub fn commit_id(&self) -> Option<&CommitId> {
        match self {
            BranchPointer::Unborn => None,
            BranchPointer::Bound(id) => Some(id),
        }
    }
}

impl std::fmt::Display for BranchPointer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BranchPointer::Unborn => write!(f, "{}", UNBORN_SENTINEL),
            BranchPointer::Bound(id) => write!(f, "{}", id),
        }
    }
}

/// Branch table manager
///
/// Handles reading and writing branch pointer files. Pointer rewrites take
/// an exclusive file lock.
#[derive(Debug, new)]
pub struct BranchTable {
    /// Path to the branches directory (typically `.jot/branches`)
    path: Box<Path>,
}

impl BranchTable {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn branch_path(&self, name: &BranchName) -> PathBuf {
        self.path.join(name.as_ref())
    }

    /// Read a branch's pointer
    ///
    /// Fails if the branch does not exist.
    pub fn read(&self, name: &BranchName) -> anyhow::Result<BranchPointer> {
        let path = self.branch_path(name);
        if !path.exists() {
            anyhow::bail!("branch {} not found", name);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read branch file {:?}", path))?;

        BranchPointer::try_parse(content.trim())
            .with_context(|| format!("malformed pointer in branch file {:?}", path))
    }

    /// Write a branch's pointer, creating or silently overwriting the file
    ///
    /// # Locking
    ///
    /// Holds an exclusive lock on the branch file during the rewrite.
    pub fn write(&self, name: &BranchName, pointer: &BranchPointer) -> anyhow::Result<()> {
        let path = self.branch_path(name);

        let mut branch_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("failed to open branch file {:?}", path))?;
        let mut lock = file_guard::lock(&mut branch_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(pointer.to_string().as_bytes())?;

        Ok(())
    }

    /// Read the active branch's pointer
    pub fn read_active(&self) -> anyhow::Result<BranchPointer> {
        self.read(&BranchName::try_parse(ACTIVE_BRANCH.to_string())?)
    }

    /// Advance the active branch to a freshly created commit
    pub fn advance_active(&self, id: CommitId) -> anyhow::Result<()> {
        self.write(
            &BranchName::try_parse(ACTIVE_BRANCH.to_string())?,
            &BranchPointer::Bound(id),
        )
    }

    /// List every branch name in the table, in sorted order
    pub fn list(&self) -> anyhow::Result<Vec<BranchName>> {
        let mut names = std::fs::read_dir(&self.path)
            .with_context(|| format!("failed to read branches directory {:?}", self.path))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .map(|entry| BranchName::try_parse(entry.file_name().to_string_lossy().to_string()))
            .collect::<anyhow::Result<Vec<_>>>()?;
        names.sort();

        Ok(names)
    }
}
