pub mod args;
pub mod choices;
pub mod config;
pub mod copier;
pub mod git;
pub mod log;
pub mod prompt;
pub mod replacer;
pub mod report;

use anyhow::Result;
use std::path::{Path, PathBuf};

use config::TemplateRoot;
use copier::CopyReport;
use prompt::{Answers, Prompter};

/// Enables `trace!` output when set
pub const TRACE_ENV: &str = "BD_THEME_TRACE";

#[derive(Debug)]
pub enum Outcome {
    Created {
        destination: PathBuf,
        answers: Answers,
        copied: CopyReport,
    },
    Cancelled,
}

/// Scaffolds `<cwd>/<folder>` from `root`, asking `prompter` for the answers.
///
/// Steps run strictly in order: prompt, resolve sources, copy, rename,
/// substitute, `git init`. Nothing is written before every source has been
/// checked, and nothing is rolled back after a later failure.
///
/// # Errors
///
/// Returns an [`Err`] on the first failing step.
pub fn scaffold<P: Prompter>(
    folder: &str,
    force_git: bool,
    cwd: &Path,
    root: &TemplateRoot,
    prompter: &mut P,
) -> Result<Outcome> {
    let Some(answers) = prompt::ask(prompter, folder, root.layout(), force_git)? else {
        return Ok(Outcome::Cancelled);
    };

    let blueprint = root.resolve(&answers)?;
    let destination = cwd.join(folder);

    copier::prepare_destination(&destination)?;
    let copied = copier::copy_sources(&blueprint.sources, &destination)?;

    if let Some(rename) = &blueprint.rename {
        rename.apply(&destination)?;
    }

    for target in &blueprint.targets {
        replacer::substitute_file(&destination.join(target), &answers)?;
    }

    if answers.init_git() {
        git::init_repository(&destination)?;
    }

    Ok(Outcome::Created {
        destination,
        answers,
        copied,
    })
}
