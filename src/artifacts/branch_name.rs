//! Validated branch names
//!
//! Branch names become file names under the branches directory, so parsing
//! rejects anything that is not a safe single path segment: separators,
//! relative components, control characters, and whitespace.

use anyhow::Context;

/// Characters and shapes a branch name must not contain:
/// leading dot, consecutive dots, path separators, control characters,
/// whitespace, and glob/ref special characters.
const INVALID_BRANCH_NAME_REGEX: &str = r"^\.|\.\.|[/\\]|[\x00-\x20\*:\?\[~\^\x7f]";

/// A branch name mapped to exactly one commit pointer
///
/// Validated at parse time; a `BranchName` is always safe to use as a
/// single path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() {
            anyhow::bail!("branch name cannot be empty");
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .with_context(|| format!("invalid branch name regex: {INVALID_BRANCH_NAME_REGEX}"))?;

        if re.is_match(&name) {
            anyhow::bail!("invalid branch name: {}", name);
        }

        Ok(Self(name))
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
