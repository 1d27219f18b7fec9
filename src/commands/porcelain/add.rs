use crate::areas::repository::Repository;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Stage files for the next commit
    ///
    /// Each path matching an ignore pattern is skipped with a notice; that
    /// is not an error and remaining paths are still staged. Staging copies
    /// the file's current bytes under its basename, overwriting any
    /// previously staged file of the same name.
    pub fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        let ignore_list = self.ignore_list()?;

        for raw_path in paths {
            let path = Path::new(raw_path);

            if let Some(pattern) = ignore_list.first_match(path) {
                writeln!(
                    self.writer(),
                    "Skipping {}: matches ignore pattern '{}'",
                    raw_path,
                    pattern.as_ref()
                )?;
                continue;
            }

            self.staging().stage(path)?;
        }

        Ok(())
    }
}
