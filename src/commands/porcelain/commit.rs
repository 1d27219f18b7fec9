use crate::areas::repository::Repository;
use crate::artifacts::commit_id::CommitId;
use crate::artifacts::metadata::CommitMetadata;
use std::io::Write;

impl Repository {
    /// Freeze the staged set into a new immutable commit
    ///
    /// The message may be empty and an empty staging set is permitted (the
    /// commit then has an empty file set). The staged files are moved into
    /// the commit directory, emptying the staging area, then the metadata
    /// record is written and the active branch pointer advanced.
    ///
    /// # Returns
    ///
    /// The new commit's identifier.
    pub fn commit(&mut self, message: &str) -> anyhow::Result<CommitId> {
        let snapshot = self.staging().snapshot()?;
        let commit_id = CommitId::derive(&snapshot);

        // a byte-identical snapshot collides and overwrites the earlier
        // commit's directory with the same content
        let commit_path = self.store().create_commit_dir(&commit_id)?;
        let files = self.staging().drain_into(&commit_path)?;

        let metadata = CommitMetadata::new(message.to_string(), files);
        self.store().write_metadata(&commit_id, &metadata)?;

        self.branches().advance_active(commit_id.clone())?;

        let is_root = match self.store().log()?.len() {
            1 => "(root-commit) ",
            _ => "",
        };

        write!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            commit_id,
            metadata.short_message()
        )?;

        Ok(commit_id)
    }
}
