use anyhow::{anyhow, Context, Result};
use derive_builder::Builder;
use inquire::{validator::ValueRequiredValidator, Confirm, InquireError, Select, Text};
use std::fmt::Display;

use crate::{
    choices::{PackageManager, TemplateVariant},
    config::Layout,
    trace, warn,
};

pub const REQUIRED: &str = "This field is required.";
pub const GIT_QUESTION: &str = "Would you like to initialize a Git repository?";
pub const VARIANT_QUESTION: &str = "Which template would you like to use?";
pub const MANAGER_QUESTION: &str = "Which package manager do you use?";

/// Free text fields collected from the user, each backed by one placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ThemeName,
    Description,
    Author,
    Version,
}

#[derive(Debug, Clone, Copy)]
pub enum Fallback {
    None,
    FolderName,
    Literal(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct TextField {
    pub field: Field,
    pub message: &'static str,
    pub fallback: Fallback,
    pub required: bool,
}

impl TextField {
    fn default_value<'a>(&self, folder: &'a str) -> Option<&'a str> {
        match self.fallback {
            Fallback::None => None,
            Fallback::FolderName => Some(folder),
            Fallback::Literal(value) => Some(value),
        }
    }
}

/// Text questions in the order they are asked
pub const TEXT_FIELDS: [TextField; 4] = [
    TextField {
        field: Field::ThemeName,
        message: "What do you want your Theme to be called?",
        fallback: Fallback::FolderName,
        required: false,
    },
    TextField {
        field: Field::Description,
        message: "Give your theme a description:",
        fallback: Fallback::None,
        required: true,
    },
    TextField {
        field: Field::Author,
        message: "What is your Github name?",
        fallback: Fallback::None,
        required: true,
    },
    TextField {
        field: Field::Version,
        message: "What is the initial version?",
        fallback: Fallback::Literal("1.0.0"),
        required: false,
    },
];

#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(setter(into))]
pub struct Answers {
    theme_name: String,
    description: String,
    author: String,
    version: String,
    #[builder(default)]
    variant: Option<TemplateVariant>,
    #[builder(default)]
    manager: Option<PackageManager>,
    init_git: bool,
}

impl Answers {
    #[must_use]
    pub fn builder() -> AnswersBuilder {
        AnswersBuilder::default()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ThemeName => &self.theme_name,
            Field::Description => &self.description,
            Field::Author => &self.author,
            Field::Version => &self.version,
        }
    }

    #[must_use]
    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    #[must_use]
    pub fn variant(&self) -> Option<TemplateVariant> {
        self.variant
    }

    #[must_use]
    pub fn manager(&self) -> Option<PackageManager> {
        self.manager
    }

    #[must_use]
    pub fn init_git(&self) -> bool {
        self.init_git
    }
}

impl AnswersBuilder {
    pub fn field(&mut self, field: Field, value: String) -> &mut Self {
        match field {
            Field::ThemeName => self.theme_name(value),
            Field::Description => self.description(value),
            Field::Author => self.author(value),
            Field::Version => self.version(value),
        }
    }
}

/// A source of answers. Every method returns `Ok(None)` when the user cancels.
pub trait Prompter {
    fn text(&mut self, message: &str, default: Option<&str>, required: bool)
        -> Result<Option<String>>;

    fn select<T: Display + Copy>(&mut self, message: &str, options: &[T]) -> Result<Option<T>>;

    fn confirm(&mut self, message: &str, default: bool) -> Result<Option<bool>>;
}

/// Terminal prompts backed by `inquire`
pub struct InquirePrompter;

fn settle<T>(answer: Result<T, InquireError>) -> Result<Option<T>> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(anyhow!("Prompt failed: {e}")),
    }
}

impl Prompter for InquirePrompter {
    fn text(
        &mut self,
        message: &str,
        default: Option<&str>,
        required: bool,
    ) -> Result<Option<String>> {
        let mut prompt = Text::new(message);

        if let Some(default) = default {
            prompt = prompt.with_default(default);
        }
        if required {
            prompt = prompt.with_validator(ValueRequiredValidator::new(REQUIRED));
        }

        settle(prompt.prompt())
    }

    fn select<T: Display + Copy>(&mut self, message: &str, options: &[T]) -> Result<Option<T>> {
        settle(Select::new(message, options.to_vec()).prompt())
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<Option<bool>> {
        settle(Confirm::new(message).with_default(default).prompt())
    }
}

macro_rules! answer_or_cancel {
    ($answer:expr) => {
        match $answer? {
            Some(value) => value,
            None => return Ok(None),
        }
    };
}

/// Runs the whole question sequence.
///
/// Returns `Ok(None)` as soon as any prompt is cancelled.
///
/// # Errors
///
/// Returns an [`Err`] if a prompt fails for a reason other than cancellation.
pub fn ask<P: Prompter>(
    prompter: &mut P,
    folder: &str,
    layout: Layout,
    force_git: bool,
) -> Result<Option<Answers>> {
    let mut builder = Answers::builder();

    for text in &TEXT_FIELDS {
        let default = text.default_value(folder);

        let value = loop {
            let value = answer_or_cancel!(prompter.text(text.message, default, text.required));

            match (value.trim().is_empty(), default) {
                (true, Some(default)) => break default.to_owned(),
                (true, None) if text.required => warn!("{REQUIRED}"),
                _ => break value,
            }
        };

        trace!("{:?} = {value:?}", text.field);
        builder.field(text.field, value);
    }

    if layout == Layout::Variants {
        let variant = answer_or_cancel!(prompter.select(VARIANT_QUESTION, &TemplateVariant::ALL));
        let manager = answer_or_cancel!(prompter.select(MANAGER_QUESTION, &PackageManager::ALL));

        builder.variant(variant).manager(manager);
    }

    let init_git = if force_git {
        true
    } else {
        answer_or_cancel!(prompter.confirm(GIT_QUESTION, false))
    };

    builder
        .init_git(init_git)
        .build()
        .map(Some)
        .context("Incomplete answers")
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::Prompter;
    use anyhow::{bail, Result};
    use std::{collections::VecDeque, fmt::Display};

    #[derive(Debug, Clone)]
    pub enum Reply {
        Typed(&'static str),
        Pick(usize),
        Yes,
        No,
        Cancel,
    }

    /// Replays canned replies and records every question asked
    #[derive(Default)]
    pub struct Scripted {
        replies: VecDeque<Reply>,
        pub asked: Vec<String>,
    }

    impl Scripted {
        pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
            Self {
                replies: replies.into_iter().collect(),
                asked: Vec::new(),
            }
        }

        fn next(&mut self, message: &str) -> Result<Reply> {
            self.asked.push(message.to_owned());
            match self.replies.pop_front() {
                Some(reply) => Ok(reply),
                None => bail!("No reply scripted for {message:?}"),
            }
        }
    }

    impl Prompter for Scripted {
        fn text(&mut self, message: &str, _: Option<&str>, _: bool) -> Result<Option<String>> {
            match self.next(message)? {
                Reply::Typed(value) => Ok(Some(value.to_owned())),
                Reply::Cancel => Ok(None),
                other => bail!("Expected text reply for {message:?}, got {other:?}"),
            }
        }

        fn select<T: Display + Copy>(&mut self, message: &str, options: &[T]) -> Result<Option<T>> {
            match self.next(message)? {
                Reply::Pick(i) => Ok(options.get(i).copied()),
                Reply::Cancel => Ok(None),
                other => bail!("Expected pick reply for {message:?}, got {other:?}"),
            }
        }

        fn confirm(&mut self, message: &str, _: bool) -> Result<Option<bool>> {
            match self.next(message)? {
                Reply::Yes => Ok(Some(true)),
                Reply::No => Ok(Some(false)),
                Reply::Cancel => Ok(None),
                other => bail!("Expected confirm reply for {message:?}, got {other:?}"),
            }
        }
    }
}
