use crate::areas::repository::Repository;
use anyhow::Context;
use std::io::Write;
use std::path::Path;
use walkdir::WalkDir;

impl Repository {
    /// Duplicate the entire repository root to a new path
    ///
    /// Copies everything below the root - working files, staging, commits,
    /// branches, and the ignore file - preserving the source exactly. This
    /// is a pure filesystem operation with no versioning logic.
    pub fn clone_to(&self, destination: &str) -> anyhow::Result<()> {
        let destination = Path::new(destination);
        if destination.exists() {
            anyhow::bail!(
                "clone destination {} already exists",
                destination.display()
            );
        }

        for entry in WalkDir::new(self.path()) {
            let entry = entry?;
            let relative_path = entry
                .path()
                .strip_prefix(self.path())
                .context("walked entry outside the repository root")?;
            let target = destination.join(relative_path);

            if entry.path().is_dir() {
                std::fs::create_dir_all(&target)
                    .with_context(|| format!("failed to create directory {:?}", target))?;
            } else {
                std::fs::copy(entry.path(), &target)
                    .with_context(|| format!("failed to copy {:?} to {:?}", entry.path(), target))?;
            }
        }

        writeln!(
            self.writer(),
            "Cloned repository into {}",
            destination.display()
        )?;

        Ok(())
    }
}
