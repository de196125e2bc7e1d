use lazy_format::lazy_format;
use owo_colors::{OwoColorize, Stream, Style};
use std::fmt::Display;

use crate::choices::PackageManager;

fn highlight<'a>(step: impl Display + 'a) -> impl Display + 'a {
    lazy_format!(
        "{}",
        step.if_supports_color(Stream::Stdout, |s| s.style(Style::new().bright_yellow()))
    )
}

/// Success banner followed by the numbered next steps
pub fn completion<'a>(folder: &'a str, manager: PackageManager) -> impl Display + 'a {
    lazy_format!(
        "\n{done} Your theme is ready!\n\nNext steps:\n 1. {cd}\n 2. {install}\n 3. {dev}\n",
        done = "[DONE]".if_supports_color(Stream::Stdout, |s| s
            .style(Style::new().bold().bright_green())),
        cd = highlight(lazy_format!("cd {}", folder)),
        install = highlight(manager.install_command()),
        dev = highlight(manager.dev_command()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_steps_in_order() {
        let text = completion("my-theme", PackageManager::Npm).to_string();

        let cd = text.find("cd my-theme").unwrap();
        let install = text.find("npm install").unwrap();
        let dev = text.find("npm run dev").unwrap();

        assert!(text.contains("[DONE]"));
        assert!(text.contains("Your theme is ready!"));
        assert!(cd < install && install < dev);
    }

    #[test]
    fn uses_chosen_manager() {
        let text = completion("x", PackageManager::Bun).to_string();

        assert!(text.contains("bun install"));
        assert!(text.contains("bun run dev"));
    }
}
