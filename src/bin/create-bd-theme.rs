use anyhow::{anyhow, Context, Result};
use clap::error::ErrorKind;
use create_bd_theme::{
    args::{Args, Parser, USAGE},
    config::TemplateRoot,
    error, info,
    prompt::{InquirePrompter, Prompter},
    report, scaffold, trace, Outcome,
};
use owo_colors::OwoColorize;
use std::{path::Path, process::ExitCode};

fn app(args: &Args) -> Result<()> {
    let folder = args.folder().map_err(|e| {
        anyhow!(
            "{e}\n\t{}\n",
            USAGE.if_supports_color(owo_colors::Stream::Stderr, |s| s
                .style(owo_colors::Style::new().dimmed()))
        )
    })?;

    let root = TemplateRoot::locate()?;
    trace!("Using templates from {}", root.path().display());

    let cwd = std::env::current_dir().context("Failed to get current dir")?;

    run(folder, args.git, &cwd, &root, &mut InquirePrompter)
}

fn run<P: Prompter>(
    folder: &str,
    force_git: bool,
    cwd: &Path,
    root: &TemplateRoot,
    prompter: &mut P,
) -> Result<()> {
    match scaffold(folder, force_git, cwd, root, prompter)? {
        Outcome::Created {
            answers, copied, ..
        } => {
            print!(
                "{}",
                report::completion(folder, answers.manager().unwrap_or_default())
            );
            if !copied.skipped.is_empty() {
                info!("Kept {} existing files untouched", copied.skipped.len());
            }
        }
        Outcome::Cancelled => info!("Cancelled, no files were copied"),
    }

    Ok(())
}

fn exit_code(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprint!("{e}");
            return ExitCode::FAILURE;
        }
    };

    exit_code(app(&args))
}
