//! Locating theme documents by name.
//!
//! # Lookup order
//!
//! 1. **User overrides**: the configured themes directory, if it exists
//! 2. **Bundled themes**: documents compiled into the binary
//! 3. Otherwise [`ThemeError::NotFound`]
//!
//! A missing themes directory only disables the first tier. A directory that
//! cannot be listed is treated the same way, with a warning.
//!
//! # Supported Extensions
//!
//! | Priority | Extension | Description |
//! |----------|-----------|-------------|
//! | 1 (highest) | `.yaml` | Standard YAML extension |
//! | 2 (lowest) | `.yml` | Short YAML extension |
//!
//! Matching is case-sensitive on the base name. If both `dark.yaml` and
//! `dark.yml` exist in the same tier, `dark.yaml` wins. Files whose names do
//! not have the `<name>.<extension>` shape are skipped.
//!
//! # Example
//!
//! ```rust,ignore
//! use snipkit_render::ThemeLoader;
//!
//! let loader = ThemeLoader::new(Some("/home/me/.config/snipkit/themes".into()));
//! let document = loader.load("dracula")?;
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{ThemeError, ThemeOrigin};

use super::bundled::BundledThemes;
use super::document::ThemeDocument;
use super::fs::{OsFs, ThemeFs};

/// Recognized theme file extensions in priority order.
pub const THEME_EXTENSIONS: &[&str] = &[".yaml", ".yml"];

/// Returns the extension priority for a file name (lower = higher priority).
///
/// Returns `usize::MAX` when no recognized extension matches.
pub fn extension_priority(file_name: &str) -> usize {
    THEME_EXTENSIONS
        .iter()
        .position(|ext| file_name.ends_with(ext))
        .unwrap_or(usize::MAX)
}

/// Extracts the theme name from a file name.
///
/// Returns `None` for files that are not theme documents: unknown
/// extension, empty base name, or a base name containing a path separator.
///
/// ```rust
/// use snipkit_render::theme_name_of;
///
/// assert_eq!(theme_name_of("dracula.yaml"), Some("dracula"));
/// assert_eq!(theme_name_of("dracula.yml"), Some("dracula"));
/// assert_eq!(theme_name_of("notes.txt"), None);
/// assert_eq!(theme_name_of(".yaml"), None);
/// ```
pub fn theme_name_of(file_name: &str) -> Option<&str> {
    let base = THEME_EXTENSIONS
        .iter()
        .find_map(|ext| file_name.strip_suffix(ext))?;
    if base.is_empty() || base.contains(['/', '\\']) {
        return None;
    }
    Some(base)
}

/// Picks the best file for `name` among `file_names`, honoring extension priority.
fn best_match<'a, I>(file_names: I, name: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    file_names
        .into_iter()
        .filter(|file| theme_name_of(file) == Some(name))
        .min_by_key(|file| extension_priority(file))
}

/// Finds and parses theme documents from the override directory and the bundled set.
#[derive(Debug, Clone)]
pub struct ThemeLoader<F = OsFs> {
    fs: F,
    bundled: BundledThemes,
    themes_dir: Option<PathBuf>,
}

impl ThemeLoader<OsFs> {
    /// A loader over the real filesystem and the builtin bundled themes.
    pub fn new(themes_dir: Option<PathBuf>) -> Self {
        Self::with_fs(OsFs, BundledThemes::builtin(), themes_dir)
    }
}

impl<F: ThemeFs> ThemeLoader<F> {
    /// A loader over a custom filesystem and bundled set.
    pub fn with_fs(fs: F, bundled: BundledThemes, themes_dir: Option<PathBuf>) -> Self {
        Self {
            fs,
            bundled,
            themes_dir,
        }
    }

    /// The configured override directory.
    pub fn themes_dir(&self) -> Option<&Path> {
        self.themes_dir.as_deref()
    }

    pub fn bundled(&self) -> BundledThemes {
        self.bundled
    }

    /// Loads the document named `name`.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::NotFound`] when neither tier has a matching document
    /// - [`ThemeError::Load`] when the matching document cannot be read or parsed
    pub fn load(&self, name: &str) -> Result<ThemeDocument, ThemeError> {
        if let Some(document) = self.load_override(name)? {
            return Ok(document);
        }
        if let Some(document) = self.load_bundled(name)? {
            return Ok(document);
        }
        Err(ThemeError::not_found(name))
    }

    /// Lists the override directory, or `None` when the tier is unavailable.
    fn override_files(&self) -> Option<(&Path, Vec<String>)> {
        let dir = self.themes_dir.as_deref()?;
        if !self.fs.dir_exists(dir) {
            tracing::trace!(dir = %dir.display(), "themes directory does not exist");
            return None;
        }
        match self.fs.read_dir(dir) {
            Ok(files) => Some((dir, files)),
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "cannot list themes directory");
                None
            }
        }
    }

    fn load_override(&self, name: &str) -> Result<Option<ThemeDocument>, ThemeError> {
        let Some((dir, files)) = self.override_files() else {
            return Ok(None);
        };
        let Some(file) = best_match(files.iter().map(String::as_str), name) else {
            return Ok(None);
        };

        let path = dir.join(file);
        tracing::debug!(theme = name, path = %path.display(), "loading theme override");
        let content = self.fs.read_to_string(&path).map_err(|e| {
            ThemeError::load(name, ThemeOrigin::Override(path.clone()), e.to_string())
        })?;
        ThemeDocument::from_yaml(name, ThemeOrigin::Override(path), &content).map(Some)
    }

    fn load_bundled(&self, name: &str) -> Result<Option<ThemeDocument>, ThemeError> {
        let entries = self.bundled.entries();
        let Some(file) = best_match(entries.iter().map(|(file, _)| *file), name) else {
            return Ok(None);
        };
        let Some(&(file, content)) = entries.iter().find(|(f, _)| *f == file) else {
            return Ok(None);
        };

        tracing::debug!(theme = name, file, "loading bundled theme");
        ThemeDocument::from_yaml(name, ThemeOrigin::Bundled(file), content).map(Some)
    }

    /// Names of all themes available from either tier, sorted and deduplicated.
    pub fn available_themes(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        if let Some((_, files)) = self.override_files() {
            names.extend(files.iter().filter_map(|f| theme_name_of(f)).map(str::to_string));
        }
        names.extend(
            self.bundled
                .entries()
                .iter()
                .filter_map(|(file, _)| theme_name_of(file))
                .map(str::to_string),
        );
        names.into_iter().collect()
    }
}
