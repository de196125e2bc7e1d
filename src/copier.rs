use anyhow::{anyhow, ensure, Context, Result};
use fs_extra::dir::CopyOptions;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{trace, warn};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub copied: usize,
    /// Paths relative to the destination that already existed and were kept
    pub skipped: Vec<PathBuf>,
}

/// Creates the destination directory (and its parents) if it does not exist.
///
/// # Errors
///
/// Returns an [`Err`] if the path exists but is not a directory or it can
/// not be created.
pub fn prepare_destination(dest: &Path) -> Result<()> {
    if dest.exists() {
        ensure!(
            dest.is_dir(),
            anyhow!("{} exists but is not a directory", dest.display())
        );
        trace!("Using existing directory {}", dest.display());
        return Ok(());
    }

    std::fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create {}", dest.display()))
}

/// Copies the contents of every source into `dest`, in order, without ever
/// overwriting a file that is already there.
///
/// # Errors
///
/// Returns an [`Err`] on the first IO error.
pub fn copy_sources(sources: &[PathBuf], dest: &Path) -> Result<CopyReport> {
    let options = CopyOptions {
        overwrite: false,
        skip_exist: true,
        content_only: true,
        ..CopyOptions::new()
    };

    let mut report = CopyReport::default();

    for source in sources {
        for entry in WalkDir::new(source).sort_by_file_name() {
            let entry = entry.with_context(|| format!("Failed to walk {}", source.display()))?;

            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(source)
                .context("Walked outside of the template source")?;

            if dest.join(relative).exists() {
                warn!("Kept existing file {}", relative.display());
                report.skipped.push(relative.to_owned());
            } else {
                report.copied += 1;
            }
        }

        fs_extra::dir::copy(source, dest, &options).with_context(|| {
            format!(
                "Failed to copy {} into {}",
                source.display(),
                dest.display()
            )
        })?;

        trace!("Copied {} into {}", source.display(), dest.display());
    }

    trace!("Copied {} files, kept {}", report.copied, report.skipped.len());

    Ok(report)
}
