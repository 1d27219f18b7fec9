//! Staging area
//!
//! The staging area is a flat directory holding copies of files queued for
//! the next commit. Files are stored under their basename only; staging a
//! name that is already present overwrites the previous copy
//! (last-write-wins). Commit consumes the whole set by moving every staged
//! file into the new commit directory, leaving the staging area empty.

use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};

/// The mutable working set of files queued for the next commit
#[derive(Debug, new)]
pub struct StagingArea {
    /// Path to the staging directory (typically `.jot/staging`)
    path: Box<Path>,
}

impl StagingArea {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy a file's current bytes into the staging set under its basename
    ///
    /// Overwrites any previously staged file of the same name; duplicate
    /// stages are not an error.
    ///
    /// # Returns
    ///
    /// The basename the file was staged under.
    pub fn stage(&self, source: &Path) -> anyhow::Result<String> {
        let basename = source
            .file_name()
            .with_context(|| format!("path has no file name: {:?}", source))?
            .to_string_lossy()
            .to_string();

        let destination = self.path.join(&basename);
        std::fs::copy(source, &destination)
            .with_context(|| format!("failed to stage {:?} into {:?}", source, destination))?;

        Ok(basename)
    }

    /// List the staged file names in sorted order
    pub fn list(&self) -> anyhow::Result<Vec<String>> {
        let mut names = std::fs::read_dir(&self.path)
            .with_context(|| format!("failed to read staging directory {:?}", self.path))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect::<Vec<_>>();
        names.sort();

        Ok(names)
    }

    /// Read the full staged snapshot as sorted `(name, content)` pairs
    pub fn snapshot(&self) -> anyhow::Result<Vec<(String, Vec<u8>)>> {
        self.list()?
            .into_iter()
            .map(|name| {
                let path = self.path.join(&name);
                let content = std::fs::read(&path)
                    .with_context(|| format!("failed to read staged file {:?}", path))?;
                Ok((name, content))
            })
            .collect()
    }

    /// Move every staged file into the given directory, emptying the set
    ///
    /// A failure mid-move aborts immediately; files already relocated are
    /// not restored.
    pub fn drain_into(&self, destination: &Path) -> anyhow::Result<Vec<String>> {
        let names = self.list()?;

        for name in &names {
            let source = self.path.join(name);
            let target = destination.join(name);

            std::fs::rename(&source, &target)
                .with_context(|| format!("failed to move {:?} into {:?}", source, target))?;
        }

        Ok(names)
    }

    /// Absolute path of a staged file
    pub fn staged_path(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}
