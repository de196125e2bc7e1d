use std::fmt::{Display, Formatter};

/// Templates available in a variant bundle (`templates/<dir_name>`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateVariant {
    Modern,
    Classic,
}

impl TemplateVariant {
    pub const ALL: [TemplateVariant; 2] = [TemplateVariant::Modern, TemplateVariant::Classic];

    #[must_use]
    pub fn dir_name(self) -> &'static str {
        match self {
            TemplateVariant::Modern => "modern",
            TemplateVariant::Classic => "classic",
        }
    }

    #[must_use]
    pub fn hint(self) -> &'static str {
        match self {
            TemplateVariant::Modern => "SCSS sources built with bd-scss",
            TemplateVariant::Classic => "prebuilt dist/ stylesheet with SCSS sources",
        }
    }
}

impl Display for TemplateVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.dir_name(), self.hint())
    }
}

/// Package managers with a fragment under `manager/<dir_name>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    pub const ALL: [PackageManager; 4] = [
        PackageManager::Npm,
        PackageManager::Yarn,
        PackageManager::Pnpm,
        PackageManager::Bun,
    ];

    #[must_use]
    pub fn dir_name(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    #[must_use]
    pub fn hint(self) -> &'static str {
        match self {
            PackageManager::Npm => "bundled with Node.js",
            PackageManager::Yarn => "yarn berry",
            PackageManager::Pnpm => "content-addressed store",
            PackageManager::Bun => "all-in-one runtime",
        }
    }

    #[must_use]
    pub fn install_command(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm install",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm install",
            PackageManager::Bun => "bun install",
        }
    }

    #[must_use]
    pub fn dev_command(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run dev",
            PackageManager::Yarn => "yarn dev",
            PackageManager::Pnpm => "pnpm dev",
            PackageManager::Bun => "bun run dev",
        }
    }
}

impl Display for PackageManager {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.dir_name(), self.hint())
    }
}
