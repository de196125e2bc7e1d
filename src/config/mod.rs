use anyhow::{anyhow, bail, ensure, Context};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::{
    choices::TemplateVariant,
    prompt::Answers,
    replacer::{Rename, RENAME_TOKEN},
    trace,
};

/// Overrides every other bundle location when set
pub const ROOT_ENV: &str = "BD_THEME_TEMPLATE_ROOT";

const SINGLE_DIR: &str = "template";
const VARIANTS_DIR: &str = "templates";
const SHARED_DIR: &str = "shared";
const MANAGER_DIR: &str = "manager";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `template/`
    Single,
    /// `templates/<variant>` + `shared/` + `manager/<pkg manager>`
    Variants,
}

/// Where the files for one run come from and which of them get rewritten
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    /// Copied in order, earlier sources win on conflicts
    pub sources: Vec<PathBuf>,
    pub rename: Option<Rename>,
    /// Relative to the destination, after the rename
    pub targets: Vec<PathBuf>,
}

/// The on-disk template bundle
#[derive(Debug, Clone)]
pub struct TemplateRoot {
    path: PathBuf,
    layout: Layout,
}

impl TemplateRoot {
    /// Finds the template bundle shipped with the tool.
    ///
    /// If [`ROOT_ENV`] is set it is the only location considered, otherwise the
    /// first of [`TemplateRoot::candidates`] holding a valid bundle is used.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if no readable bundle is found.
    pub fn locate() -> anyhow::Result<Self> {
        if let Some(path) = std::env::var_os(ROOT_ENV) {
            return Self::open(Path::new(&path))
                .with_context(|| format!("Invalid template root set by {ROOT_ENV}"));
        }

        let candidates = Self::candidates()?;

        for candidate in &candidates {
            match Self::open(candidate) {
                Ok(root) => return Ok(root),
                Err(e) => trace!("Skipping {}: {e}", candidate.display()),
            }
        }

        bail!(
            "No template bundle found. Looked in:\n{}",
            candidates
                .iter()
                .map(|c| format!("\t{}", c.display()))
                .collect::<Vec<_>>()
                .join("\n")
        )
    }

    /// Locations searched for the bundle, in order:
    /// - `<exe dir>/assets`
    /// - `<exe dir>/../share/create-bd-theme`
    /// - the per-user data dir, e.g. `~/.local/share/create-bd-theme`
    /// - the `assets/` dir of this crate, for development builds
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if the path of the running executable is unavailable.
    pub fn candidates() -> anyhow::Result<Vec<PathBuf>> {
        let exe = std::env::current_exe().context("Failed to get the executable path")?;
        let exe_dir = exe
            .parent()
            .ok_or(anyhow!("Executable {} has no parent", exe.display()))?;

        let mut candidates = vec![
            exe_dir.join("assets"),
            exe_dir.join("..").join("share").join("create-bd-theme"),
        ];

        if let Some(dirs) = ProjectDirs::from("", "", "create-bd-theme") {
            candidates.push(dirs.data_dir().to_owned());
        }

        candidates.push(Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"));

        Ok(candidates)
    }

    /// Opens a bundle, detecting its layout and checking that the base
    /// directories of that layout can be read.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if `path` holds neither layout or a required
    /// directory is unreadable.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let layout = if path.join(VARIANTS_DIR).is_dir() {
            Layout::Variants
        } else if path.join(SINGLE_DIR).is_dir() {
            Layout::Single
        } else {
            bail!(
                "{} contains neither a '{SINGLE_DIR}' nor a '{VARIANTS_DIR}' directory",
                path.display()
            )
        };

        let root = Self {
            path: path.to_owned(),
            layout,
        };

        match layout {
            Layout::Single => ensure_readable(&root.path.join(SINGLE_DIR))?,
            Layout::Variants => {
                for dir in [VARIANTS_DIR, SHARED_DIR, MANAGER_DIR] {
                    ensure_readable(&root.path.join(dir))?;
                }
            }
        }

        trace!("Template root: {} ({layout:?})", root.path.display());

        Ok(root)
    }

    /// Resolves the sources, rename and substitution targets for a set of
    /// answers. Every source is checked for read access before returning.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if a variant bundle is resolved without a variant or
    /// package manager, or any source directory is unreadable.
    pub fn resolve(&self, answers: &Answers) -> anyhow::Result<Blueprint> {
        let blueprint = match self.layout {
            Layout::Single => Blueprint {
                sources: vec![self.path.join(SINGLE_DIR)],
                rename: None,
                targets: vec![
                    "package.json".into(),
                    "bd-scss.config.js".into(),
                    "README.md".into(),
                ],
            },
            Layout::Variants => {
                let variant = answers
                    .variant()
                    .context("A template variant must be chosen for this bundle")?;
                let manager = answers
                    .manager()
                    .context("A package manager must be chosen for this bundle")?;

                let mut blueprint = Blueprint {
                    sources: vec![
                        self.path.join(VARIANTS_DIR).join(variant.dir_name()),
                        self.path.join(SHARED_DIR),
                        self.path.join(MANAGER_DIR).join(manager.dir_name()),
                    ],
                    rename: None,
                    targets: Vec::new(),
                };

                match variant {
                    TemplateVariant::Modern => {
                        blueprint.targets = vec![
                            "package.json".into(),
                            "bd-scss.config.js".into(),
                            "README.md".into(),
                        ];
                    }
                    TemplateVariant::Classic => {
                        let rename = Rename::new(
                            Path::new("dist").join(format!("{RENAME_TOKEN}.theme.css")),
                            answers.theme_name(),
                        );

                        blueprint.targets = vec![
                            rename.to.clone(),
                            Path::new("src").join("_theme.scss"),
                            "package.json".into(),
                            "README.md".into(),
                        ];
                        blueprint.rename = Some(rename);
                    }
                }

                blueprint
            }
        };

        for source in &blueprint.sources {
            ensure_readable(source)?;
        }

        Ok(blueprint)
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

/// Checks that `path` is a directory whose entries can be listed.
///
/// # Errors
///
/// Returns an [`Err`] if the directory is missing or unreadable.
pub fn ensure_readable(path: &Path) -> anyhow::Result<()> {
    ensure!(
        path.is_dir(),
        anyhow!("Template source {} is not a directory", path.display())
    );

    std::fs::read_dir(path)
        .with_context(|| format!("Template source {} is not readable", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choices::PackageManager;
    use std::fs;
    use tempfile::TempDir;

    fn answers(variant: Option<TemplateVariant>, manager: Option<PackageManager>) -> Answers {
        Answers::builder()
            .theme_name("My Theme")
            .description("d")
            .author("a")
            .version("1.0.0")
            .variant(variant)
            .manager(manager)
            .init_git(false)
            .build()
            .unwrap()
    }

    fn variant_bundle() -> TempDir {
        let tmp = TempDir::new().unwrap();
        for dir in [
            "templates/modern",
            "templates/classic",
            "shared",
            "manager/npm",
            "manager/bun",
        ] {
            fs::create_dir_all(tmp.path().join(dir)).unwrap();
        }
        tmp
    }

    #[test]
    fn detects_single_layout() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("template")).unwrap();

        let root = TemplateRoot::open(tmp.path()).unwrap();
        assert_eq!(root.layout(), Layout::Single);

        let blueprint = root.resolve(&answers(None, None)).unwrap();
        assert_eq!(blueprint.sources, vec![tmp.path().join("template")]);
        assert_eq!(blueprint.rename, None);
        assert_eq!(blueprint.targets.len(), 3);
    }

    #[test]
    fn variants_layout_wins_over_single() {
        let tmp = variant_bundle();
        fs::create_dir(tmp.path().join("template")).unwrap();

        let root = TemplateRoot::open(tmp.path()).unwrap();
        assert_eq!(root.layout(), Layout::Variants);
    }

    #[test]
    fn empty_root_is_rejected() {
        let tmp = TempDir::new().unwrap();

        assert!(TemplateRoot::open(tmp.path()).is_err());
    }

    #[test]
    fn variants_layout_needs_shared_dir() {
        let tmp = variant_bundle();
        fs::remove_dir(tmp.path().join("shared")).unwrap();

        let err = TemplateRoot::open(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("shared"));
    }

    #[test]
    fn resolves_sources_in_copy_order() {
        let tmp = variant_bundle();
        let root = TemplateRoot::open(tmp.path()).unwrap();

        let blueprint = root
            .resolve(&answers(
                Some(TemplateVariant::Modern),
                Some(PackageManager::Bun),
            ))
            .unwrap();

        assert_eq!(
            blueprint.sources,
            vec![
                tmp.path().join("templates/modern"),
                tmp.path().join("shared"),
                tmp.path().join("manager/bun"),
            ]
        );
        assert_eq!(blueprint.rename, None);
    }

    #[test]
    fn classic_variant_renames_stylesheet() {
        let tmp = variant_bundle();
        let root = TemplateRoot::open(tmp.path()).unwrap();

        let blueprint = root
            .resolve(&answers(
                Some(TemplateVariant::Classic),
                Some(PackageManager::Npm),
            ))
            .unwrap();

        let rename = blueprint.rename.unwrap();
        assert_eq!(rename.from, Path::new("dist/THEMENAME.theme.css"));
        assert_eq!(rename.to, Path::new("dist/My Theme.theme.css"));
        assert_eq!(blueprint.targets[0], rename.to);
    }

    #[test]
    fn missing_manager_fragment_is_an_error() {
        let tmp = variant_bundle();
        let root = TemplateRoot::open(tmp.path()).unwrap();

        let err = root
            .resolve(&answers(
                Some(TemplateVariant::Modern),
                Some(PackageManager::Yarn),
            ))
            .unwrap_err();

        assert!(err.to_string().contains("yarn"));
    }

    #[test]
    fn variants_layout_requires_choices() {
        let tmp = variant_bundle();
        let root = TemplateRoot::open(tmp.path()).unwrap();

        assert!(root.resolve(&answers(None, None)).is_err());
    }

    #[test]
    fn crate_assets_are_a_candidate() {
        let candidates = TemplateRoot::candidates().unwrap();

        assert_eq!(
            candidates.last().unwrap(),
            &Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
        );
    }

    #[test]
    fn bundled_assets_open_as_variants() {
        let assets = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        let root = TemplateRoot::open(&assets).unwrap();

        assert_eq!(root.layout(), Layout::Variants);
    }
}
