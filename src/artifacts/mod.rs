//! Value types and algorithms
//!
//! This module contains the core jot types and algorithms:
//!
//! - `branch_name`: validated branch names
//! - `commit_id`: commit identifiers derived from staged snapshots
//! - `diff`: snapshot comparison between two branches
//! - `ignore`: ignore-pattern matching
//! - `metadata`: the per-commit metadata record

pub mod branch_name;
pub mod commit_id;
pub mod diff;
pub mod ignore;
pub mod metadata;
