use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::{
    prompt::{Answers, Field},
    trace,
};

/// Marker in template file names replaced by the theme name
pub const RENAME_TOKEN: &str = "THEMENAME";

/// Markers in template file contents, applied in this order
pub const PLACEHOLDERS: [(&str, Field); 4] = [
    ("--THEMENAME", Field::ThemeName),
    ("--DESCRIPTION", Field::Description),
    ("--AUTHOR", Field::Author),
    ("--VERSION", Field::Version),
];

/// Replaces every placeholder in `contents`.
///
/// Placeholders are replaced one after the other, so an answer that itself
/// contains a later marker gets that marker replaced too.
#[must_use]
pub fn substitute(contents: &str, answers: &Answers) -> String {
    PLACEHOLDERS
        .iter()
        .fold(contents.to_owned(), |text, (token, field)| {
            text.replace(*token, answers.get(*field))
        })
}

/// Rewrites `path` in place with every placeholder replaced.
///
/// # Errors
///
/// Returns an [`Err`] if the file can not be read or written.
pub fn substitute_file(path: &Path, answers: &Answers) -> Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    std::fs::write(path, substitute(&contents, answers))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    trace!("Substituted placeholders in {}", path.display());

    Ok(())
}

/// A file shipped under a placeholder name, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl Rename {
    #[must_use]
    pub fn new(from: PathBuf, theme_name: &str) -> Self {
        let name = from
            .file_name()
            .map(|n| n.to_string_lossy().replace(RENAME_TOKEN, theme_name))
            .unwrap_or_default();
        let to = from.with_file_name(name);

        Self { from, to }
    }

    /// Renames the file inside `project`.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if the placeholder file is missing or the rename fails.
    pub fn apply(&self, project: &Path) -> Result<PathBuf> {
        let from = project.join(&self.from);
        let to = project.join(&self.to);

        std::fs::rename(&from, &to).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                from.display(),
                to.display()
            )
        })?;

        trace!("Renamed {} to {}", from.display(), to.display());

        Ok(to)
    }
}
