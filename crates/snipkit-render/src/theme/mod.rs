//! Theme documents, variable resolution and lookup.
//!
//! A theme is a YAML document with a variable table and a set of named color
//! slots. Resolution happens in three steps:
//!
//! 1. [`ThemeLoader`] finds the document, preferring the user's themes
//!    directory over the bundled set
//! 2. [`resolve_variables`] replaces every `${name}` slot with its literal
//! 3. [`ThemeStore`] composes both and falls back to [`DEFAULT_THEME`] when
//!    the requested name does not exist
//!
//! ```rust
//! use snipkit_render::{BundledThemes, OsFs, ThemeLoader, ThemeStore};
//!
//! let store = ThemeStore::new(ThemeLoader::with_fs(OsFs, BundledThemes::builtin(), None));
//! let values = store.get("dracula").unwrap();
//! assert_eq!(values.title_color, "#BD93F9");
//! ```

mod bundled;
mod document;
mod fs;
mod loader;
mod store;
mod variables;

pub use bundled::BundledThemes;
pub use document::{ThemeDocument, ThemeValues, VariableTable};
pub use fs::{OsFs, ThemeFs};
pub use loader::{extension_priority, theme_name_of, ThemeLoader, THEME_EXTENSIONS};
pub use store::{ThemeStore, DEFAULT_THEME};
pub use variables::{resolve_variables, variable_reference};
