//! Theme lookup with fallback to the default theme.

use crate::error::ThemeError;

use super::document::ThemeValues;
use super::fs::{OsFs, ThemeFs};
use super::loader::ThemeLoader;
use super::variables::resolve_variables;

/// Name of the theme used when the requested one does not exist.
pub const DEFAULT_THEME: &str = "default";

/// Produces fully resolved theme values by name.
///
/// The store holds no cache; callers typically resolve once and keep the
/// result for the lifetime of the screen.
#[derive(Debug, Clone)]
pub struct ThemeStore<F = OsFs> {
    loader: ThemeLoader<F>,
}

impl<F: ThemeFs> ThemeStore<F> {
    pub fn new(loader: ThemeLoader<F>) -> Self {
        Self { loader }
    }

    pub fn loader(&self) -> &ThemeLoader<F> {
        &self.loader
    }

    /// Loads and resolves `name`, falling back to [`DEFAULT_THEME`].
    ///
    /// # Errors
    ///
    /// - [`ThemeError::NotFound`] for `name` when neither it nor the default exists
    /// - [`ThemeError::Load`] when the chosen document is corrupt
    /// - [`ThemeError::UndefinedVariable`] when the chosen document references
    ///   a variable it does not define
    pub fn get(&self, name: &str) -> Result<ThemeValues, ThemeError> {
        let document = match self.loader.load(name) {
            Ok(document) => document,
            Err(err) if err.is_not_found() && name != DEFAULT_THEME => {
                tracing::warn!(theme = name, fallback = DEFAULT_THEME, "theme not found, using fallback");
                match self.loader.load(DEFAULT_THEME) {
                    Ok(document) => document,
                    Err(fallback) if fallback.is_not_found() => return Err(err),
                    Err(fallback) => return Err(fallback),
                }
            }
            Err(err) => return Err(err),
        };

        resolve_variables(&document)
    }

    /// Names of all themes the loader can see.
    pub fn available_themes(&self) -> Vec<String> {
        self.loader.available_themes()
    }
}
