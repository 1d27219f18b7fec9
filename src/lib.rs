//! jot - a local, single-user version-control engine
//!
//! jot tracks snapshots of files inside a working directory, groups them
//! into commits, and maintains independent branch pointers over the commit
//! history. It is organized in three layers:
//!
//! - `areas`: storage components owned by the repository (staging area,
//!   commit store, branch table)
//! - `artifacts`: value types and algorithms (commit identifiers, branch
//!   names, metadata records, ignore patterns, diffing)
//! - `commands`: user-facing operations implemented on `Repository`

pub mod areas;
pub mod artifacts;
pub mod commands;
