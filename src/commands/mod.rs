//! Command implementations
//!
//! User-facing operations, one file per command, implemented as extension
//! blocks on `Repository`:
//!
//! - `init`: initialize the repository structure
//! - `add`: stage files for the next commit
//! - `commit`: freeze the staged set into an immutable commit
//! - `log`: show commit history
//! - `branch`: create a branch from the active pointer
//! - `diff`: compare snapshots between two branches
//! - `clone`: duplicate the entire repository to a new path

pub mod porcelain;
