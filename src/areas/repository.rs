//! Repository orchestration
//!
//! `Repository` composes the staging area, commit store, and branch table,
//! and is the sole entry point for staging, committing, branching, diffing,
//! and cloning. It exclusively owns all on-disk structures under its control
//! directory; no other component mutates them directly.

use crate::areas::branches::BranchTable;
use crate::areas::staging::StagingArea;
use crate::areas::store::CommitStore;
use crate::artifacts::ignore::IgnoreList;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the control directory under the repository root
pub const CONTROL_DIR: &str = ".jot";

/// Name of the ignore-pattern file inside the control directory
pub const IGNORE_FILE_NAME: &str = "ignore";

/// A local, single-user repository
///
/// All operations are synchronous and run to completion before returning.
/// The on-disk structures carry no locking discipline beyond the branch
/// pointer rewrite; callers must uphold the single-actor assumption, since
/// concurrent commits on the same repository race on staging enumeration
/// and metadata writes.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    staging: StagingArea,
    store: CommitStore,
    branches: BranchTable,
}

impl Repository {
    /// Open (or prepare to initialize) a repository rooted at `path`
    ///
    /// Creates the root directory if it does not exist. The control
    /// directory itself is only created by `init`.
    ///
    /// # Arguments
    ///
    /// * `path` - the repository root
    /// * `writer` - destination for human-readable command output
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path);
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?;

        let control_path = path.join(CONTROL_DIR);
        let staging = StagingArea::new(control_path.join("staging").into_boxed_path());
        let store = CommitStore::new(control_path.join("commits").into_boxed_path());
        let branches = BranchTable::new(control_path.join("branches").into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            staging,
            store,
            branches,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn staging(&self) -> &StagingArea {
        &self.staging
    }

    pub fn store(&self) -> &CommitStore {
        &self.store
    }

    pub fn branches(&self) -> &BranchTable {
        &self.branches
    }

    pub fn control_path(&self) -> Box<Path> {
        self.path.join(CONTROL_DIR).into_boxed_path()
    }

    pub fn ignore_path(&self) -> Box<Path> {
        self.control_path().join(IGNORE_FILE_NAME).into_boxed_path()
    }

    /// Load the ignore-pattern list from the ignore file
    ///
    /// A missing ignore file yields the empty list.
    pub fn ignore_list(&self) -> anyhow::Result<IgnoreList> {
        let path = self.ignore_path();
        if !path.exists() {
            return Ok(IgnoreList::default());
        }

        let content = std::fs::read_to_string(&path)?;
        Ok(IgnoreList::parse(&content))
    }
}
