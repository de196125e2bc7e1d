use anyhow::{bail, Result};
pub use clap::Parser;

/// Usage line printed when the directory name is missing
pub const USAGE: &str = "create-bd-theme <directory name>";

#[derive(Parser, Debug, Default)]
#[clap(version, about)]
pub struct Args {
    /// Name of the directory to create the theme in
    pub folder_name: Option<String>,

    /// Initialize a Git repository without asking
    #[clap(long)]
    pub git: bool,
}

impl Args {
    /// Returns the destination folder name.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if no folder name was given or it is blank.
    pub fn folder(&self) -> Result<&str> {
        match self.folder_name.as_deref() {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => bail!("You must provide a name for your new directory."),
        }
    }
}
