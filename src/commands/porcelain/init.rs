use crate::areas::branches::{ACTIVE_BRANCH, UNBORN_SENTINEL};
use crate::areas::repository::{CONTROL_DIR, Repository};
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    /// Initialize the repository structure under the control directory
    ///
    /// Idempotent: re-running init leaves an existing repository untouched.
    pub fn init(&mut self) -> anyhow::Result<()> {
        fs::create_dir_all(self.staging().path())
            .context("failed to create the staging directory")?;

        fs::create_dir_all(self.store().path())
            .context("failed to create the commits directory")?;

        fs::create_dir_all(self.branches().path())
            .context("failed to create the branches directory")?;

        // the active branch starts unborn
        let active_branch_path = self.branches().path().join(ACTIVE_BRANCH);
        if !active_branch_path.exists() {
            fs::write(&active_branch_path, UNBORN_SENTINEL)
                .context("failed to create the active branch file")?;
        }

        // by default the control directory ignores itself
        let ignore_path = self.ignore_path();
        if !ignore_path.exists() {
            fs::write(&ignore_path, format!("{CONTROL_DIR}\n"))
                .context("failed to create the ignore file")?;
        }

        write!(
            self.writer(),
            "Initialized empty jot repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
