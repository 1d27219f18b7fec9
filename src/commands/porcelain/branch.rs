use crate::areas::repository::Repository;
use crate::artifacts::branch_name::BranchName;
use std::io::Write;

impl Repository {
    /// Create a branch pointing at the active branch's current commit
    ///
    /// The new branch copies the active pointer as-is, including the unborn
    /// sentinel when no commit has been made yet. Creating a branch that
    /// already exists silently overwrites its pointer.
    pub fn branch(&mut self, name: &str) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse(name.to_string())?;
        let pointer = self.branches().read_active()?;

        self.branches().write(&branch_name, &pointer)?;

        writeln!(self.writer(), "{} -> {}", branch_name, pointer)?;

        Ok(())
    }
}
