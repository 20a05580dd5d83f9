//! UI settings read from the host's configuration file.
//!
//! ```yaml
//! theme: dracula
//! themesDir: /home/me/.config/snipkit/themes
//! showHelp: false
//! ```
//!
//! Every key is optional. Without `themesDir`, override themes are looked up
//! in `$SNIPKIT_HOME/themes`, then in `<config dir>/snipkit/themes`.

use std::path::PathBuf;

use serde::Deserialize;

use crate::capability::color_capability;
use crate::error::{ConfigError, ThemeError};
use crate::layout::AdaptiveRenderer;
use crate::style::Styler;
use crate::theme::{OsFs, ThemeLoader, ThemeStore, DEFAULT_THEME};

/// Environment variable pointing at the snipkit home directory.
pub const SNIPKIT_HOME_ENV: &str = "SNIPKIT_HOME";

const THEMES_SUBDIR: &str = "themes";
const APP_DIR: &str = "snipkit";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    /// Name of the theme to render with.
    pub theme: String,
    /// Directory searched for user themes before the bundled set.
    pub themes_dir: Option<PathBuf>,
    pub show_help: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            themes_dir: None,
            show_help: true,
        }
    }
}

impl UiConfig {
    /// Parses a config document. An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// The override directory this config points at.
    pub fn resolved_themes_dir(&self) -> Option<PathBuf> {
        self.resolved_themes_dir_with(|key| std::env::var(key).ok(), dirs::config_dir())
    }

    fn resolved_themes_dir_with<F>(&self, lookup: F, config_dir: Option<PathBuf>) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = &self.themes_dir {
            return Some(dir.clone());
        }
        if let Some(home) = lookup(SNIPKIT_HOME_ENV).filter(|home| !home.is_empty()) {
            return Some(PathBuf::from(home).join(THEMES_SUBDIR));
        }
        config_dir.map(|dir| dir.join(APP_DIR).join(THEMES_SUBDIR))
    }

    /// A theme store over the real filesystem and the bundled themes.
    pub fn theme_store(&self) -> ThemeStore<OsFs> {
        let themes_dir = self.resolved_themes_dir();
        tracing::debug!(?themes_dir, theme = %self.theme, "building theme store");
        ThemeStore::new(ThemeLoader::new(themes_dir))
    }

    /// Resolves the configured theme and builds a styler for the process's
    /// color capability.
    pub fn styler(&self) -> Result<Styler, ThemeError> {
        let values = self.theme_store().get(&self.theme)?;
        Ok(Styler::new(&values, color_capability()))
    }

    pub fn renderer(&self) -> AdaptiveRenderer {
        AdaptiveRenderer::new(self.show_help)
    }
}
