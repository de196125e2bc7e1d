use anyhow::{bail, Context, Result};
use std::{ffi::OsStr, path::Path, process::Command};

use crate::trace;

/// Runs `git init` inside `dest`.
///
/// # Errors
///
/// Returns an [`Err`] if git can not be spawned or exits unsuccessfully.
pub fn init_repository(dest: &Path) -> Result<()> {
    init_with("git", dest)
}

pub(crate) fn init_with(program: impl AsRef<OsStr>, dest: &Path) -> Result<()> {
    let output = Command::new(program.as_ref())
        .arg("init")
        .current_dir(dest)
        .output()
        .context("Failed to initialize Git.")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("Failed to initialize Git.\n{}", stderr.trim_end());
    }

    trace!("{}", String::from_utf8_lossy(&output.stdout).trim_end());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_program_fails() {
        let tmp = TempDir::new().unwrap();

        let err = init_with("create-bd-theme-no-such-git", tmp.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to initialize Git"));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_fails() {
        let tmp = TempDir::new().unwrap();

        assert!(init_with("false", tmp.path()).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_succeeds() {
        let tmp = TempDir::new().unwrap();

        assert!(init_with("true", tmp.path()).is_ok());
    }

    #[test]
    fn missing_directory_fails() {
        let tmp = TempDir::new().unwrap();

        assert!(init_repository(&tmp.path().join("gone")).is_err());
    }
}
