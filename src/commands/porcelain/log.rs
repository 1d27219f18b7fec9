use crate::areas::repository::Repository;
use crate::artifacts::commit_id::CommitId;
use crate::artifacts::metadata::CommitMetadata;
use std::io::Write;

impl Repository {
    /// Show the commit history
    ///
    /// Commits are listed in ascending identifier-sort order, not creation
    /// order; identifiers are content hashes, not sequence numbers.
    ///
    /// # Returns
    ///
    /// The logged entries, for library callers.
    pub fn log(&self) -> anyhow::Result<Vec<(CommitId, CommitMetadata)>> {
        let entries = self.store().log()?;

        for (commit_id, metadata) in &entries {
            self.show_commit(commit_id, metadata)?;
            writeln!(self.writer())?;
        }

        Ok(entries)
    }

    fn show_commit(&self, commit_id: &CommitId, metadata: &CommitMetadata) -> anyhow::Result<()> {
        writeln!(self.writer(), "commit {}", commit_id)?;
        writeln!(self.writer(), "Date:  {}", metadata.readable_timestamp())?;
        writeln!(self.writer(), "Files: {}", metadata.files.join(", "))?;
        writeln!(self.writer())?;
        for message_line in metadata.message.lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }
}
