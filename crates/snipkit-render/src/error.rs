//! Error types for theme loading, resolution and configuration.
//!
//! The three [`ThemeError`] kinds are fatal for the rendering subsystem. They
//! are kept as separate variants so a host can print a specific diagnostic
//! instead of a generic failure.

use std::path::PathBuf;

/// Errors raised while turning a theme name into a resolved [`ThemeValues`](crate::ThemeValues).
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// No bundled or override document matches the requested name.
    #[error("theme '{name}' not found")]
    NotFound { name: String },

    /// A matching document exists but could not be read or parsed.
    #[error("failed to load theme '{name}' from {origin}: {message}")]
    Load {
        name: String,
        origin: ThemeOrigin,
        message: String,
    },

    /// A slot references a variable the document does not define.
    #[error("variable '{variable}' undefined in theme '{theme}'")]
    UndefinedVariable { theme: String, variable: String },
}

impl ThemeError {
    pub(crate) fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub(crate) fn load(
        name: impl Into<String>,
        origin: ThemeOrigin,
        message: impl Into<String>,
    ) -> Self {
        Self::Load {
            name: name.into(),
            origin,
            message: message.into(),
        }
    }

    /// Returns the missing variable name for [`ThemeError::UndefinedVariable`].
    pub fn undefined_variable(&self) -> Option<&str> {
        match self {
            Self::UndefinedVariable { variable, .. } => Some(variable),
            _ => None,
        }
    }

    /// True for [`ThemeError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Where a theme document came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeOrigin {
    /// Compiled into the binary, identified by its resource file name.
    Bundled(&'static str),
    /// A file in the user's themes directory.
    Override(PathBuf),
}

impl std::fmt::Display for ThemeOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeOrigin::Bundled(file) => write!(f, "bundled themes/{}", file),
            ThemeOrigin::Override(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Errors raised while reading a [`UiConfig`](crate::UiConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid ui config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ThemeError::not_found("solarized");
        assert_eq!(err.to_string(), "theme 'solarized' not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_undefined_variable_display() {
        let err = ThemeError::UndefinedVariable {
            theme: "dark".to_string(),
            variable: "accent".to_string(),
        };
        assert_eq!(err.to_string(), "variable 'accent' undefined in theme 'dark'");
        assert_eq!(err.undefined_variable(), Some("accent"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_load_error_mentions_origin() {
        let err = ThemeError::load(
            "broken",
            ThemeOrigin::Override(PathBuf::from("/home/me/.config/snipkit/themes/broken.yaml")),
            "did not find expected key",
        );
        let msg = err.to_string();
        assert!(msg.contains("broken.yaml"));
        assert!(msg.contains("did not find expected key"));

        let bundled = ThemeError::load("x", ThemeOrigin::Bundled("x.yaml"), "bad");
        assert!(bundled.to_string().contains("bundled themes/x.yaml"));
    }

    #[test]
    fn test_config_error_wraps_yaml() {
        let yaml_err = serde_yaml::from_str::<u8>("[").unwrap_err();
        let err = ConfigError::from(yaml_err);
        assert!(err.to_string().starts_with("invalid ui config: "));
    }
}
