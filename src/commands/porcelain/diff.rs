use crate::areas::repository::Repository;
use crate::artifacts::branch_name::BranchName;
use crate::artifacts::diff::BranchDiff;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Compare the snapshots bound to two branches
    ///
    /// Each branch name resolves to its bound commit; an unborn branch
    /// contributes the empty snapshot. Referencing an unknown branch is an
    /// error. The printed listing is sorted for readability; the returned
    /// sets are unordered.
    pub fn diff(&mut self, first: &str, second: &str) -> anyhow::Result<BranchDiff> {
        let first_pointer = self.branches().read(&BranchName::try_parse(first.to_string())?)?;
        let second_pointer = self
            .branches()
            .read(&BranchName::try_parse(second.to_string())?)?;

        let first_snapshot = self.store().snapshot(first_pointer.commit_id())?;
        let second_snapshot = self.store().snapshot(second_pointer.commit_id())?;

        let diff = BranchDiff::between(&first_snapshot, &second_snapshot);

        self.show_changeset("added", &diff.added, |line| line.green())?;
        self.show_changeset("removed", &diff.removed, |line| line.red())?;
        self.show_changeset("modified", &diff.modified, |line| line.yellow())?;

        Ok(diff)
    }

    fn show_changeset(
        &self,
        label: &str,
        files: &[String],
        paint: fn(&str) -> colored::ColoredString,
    ) -> anyhow::Result<()> {
        let mut files = files.to_vec();
        files.sort();

        for file in files {
            writeln!(self.writer(), "{}", paint(&format!("{}: {}", label, file)))?;
        }

        Ok(())
    }
}
