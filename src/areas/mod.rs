//! Core repository components
//!
//! This module contains the fundamental building blocks of a jot repository:
//!
//! - `branches`: branch table mapping names to commit pointers
//! - `repository`: high-level repository operations and coordination
//! - `staging`: staging area for files queued for the next commit
//! - `store`: content store and commit log

pub(crate) mod branches;
pub mod repository;
pub(crate) mod staging;
pub(crate) mod store;
