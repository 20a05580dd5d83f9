//! Theme documents as stored on disk or bundled in the binary.
//!
//! ```yaml
//! version: 1.0.0
//! variables:
//!   pink: "#F25D94"
//!   white: "#FFFDF5"
//! theme:
//!   titleColor: ${pink}
//!   titleContrastColor: ${white}
//!   borderColor: "#874BFD"
//! ```
//!
//! Every slot is a plain string. Before resolution a slot may hold a
//! `${name}` reference into `variables`; see [`resolve_variables`](super::resolve_variables).
//! Scalars of any YAML type are accepted and kept as their textual form, so
//! `textColor: 205` and `textColor: "205"` are equivalent.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_yaml::Value;

use crate::error::{ThemeError, ThemeOrigin};

/// Named color slots of a theme.
///
/// Empty slots mean "no color". `placeholder_color` falls back to
/// `subdued_color` when left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeValues {
    pub title_color: String,
    pub title_contrast_color: String,
    pub border_color: String,
    pub text_color: String,
    pub placeholder_color: String,
    pub active_color: String,
    pub active_contrast_color: String,
    pub info_color: String,
    pub highlight_color: String,
    pub highlight_contrast_color: String,
    pub success_color: String,
    pub error_color: String,
    pub snippet_color: String,
    pub snippet_contrast_color: String,
    pub subdued_color: String,
    pub subdued_contrast_color: String,
    pub very_subdued_color: String,
    pub very_subdued_contrast_color: String,
    /// Syntax-highlighting scheme used for snippet previews.
    pub preview_color_scheme_name: String,
}

/// Declares the document key of every slot. The generated table is the
/// closed set of fields that parsing and variable resolution touch.
macro_rules! theme_slots {
    ($($key:literal => $field:ident),* $(,)?) => {
        impl ThemeValues {
            /// Document keys of all slots, in declaration order.
            pub const SLOT_KEYS: &'static [&'static str] = &[$($key),*];

            /// Returns the slot stored under a document key.
            pub fn slot(&self, key: &str) -> Option<&str> {
                match key {
                    $($key => Some(self.$field.as_str()),)*
                    _ => None,
                }
            }

            pub(crate) fn slot_mut(&mut self, key: &str) -> Option<&mut String> {
                match key {
                    $($key => Some(&mut self.$field),)*
                    _ => None,
                }
            }

            pub(crate) fn slots_mut(&mut self) -> Vec<(&'static str, &mut String)> {
                vec![$(($key, &mut self.$field)),*]
            }
        }
    };
}

theme_slots! {
    "titleColor" => title_color,
    "titleContrastColor" => title_contrast_color,
    "borderColor" => border_color,
    "textColor" => text_color,
    "placeholderColor" => placeholder_color,
    "activeColor" => active_color,
    "activeContrastColor" => active_contrast_color,
    "infoColor" => info_color,
    "highlightColor" => highlight_color,
    "highlightContrastColor" => highlight_contrast_color,
    "successColor" => success_color,
    "errorColor" => error_color,
    "snippetColor" => snippet_color,
    "snippetContrastColor" => snippet_contrast_color,
    "subduedColor" => subdued_color,
    "subduedContrastColor" => subdued_contrast_color,
    "verySubduedColor" => very_subdued_color,
    "verySubduedContrastColor" => very_subdued_contrast_color,
    "previewColorSchemeName" => preview_color_scheme_name,
}

/// Variable name to literal color specification.
pub type VariableTable = BTreeMap<String, String>;

/// A parsed, not yet resolved theme document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDocument {
    name: String,
    origin: ThemeOrigin,
    version: String,
    variables: VariableTable,
    values: ThemeValues,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDocument {
    version: Value,
    variables: BTreeMap<String, Value>,
    theme: BTreeMap<String, Value>,
}

fn scalar_to_string(value: Value) -> Result<String, String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => Err("expected a scalar value".to_string()),
    }
}

impl ThemeDocument {
    /// Parses YAML content into a document named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Load`] when the content is not a valid theme document.
    pub fn from_yaml(
        name: impl Into<String>,
        origin: ThemeOrigin,
        yaml: &str,
    ) -> Result<Self, ThemeError> {
        let name = name.into();
        let raw = if yaml.trim().is_empty() {
            RawDocument::default()
        } else {
            match serde_yaml::from_str::<Option<RawDocument>>(yaml) {
                Ok(raw) => raw.unwrap_or_default(),
                Err(e) => return Err(ThemeError::load(name, origin, e.to_string())),
            }
        };

        let version = match scalar_to_string(raw.version) {
            Ok(version) => version,
            Err(reason) => return Err(ThemeError::load(name, origin, format!("version: {}", reason))),
        };

        let mut variables = VariableTable::new();
        for (key, value) in raw.variables {
            match scalar_to_string(value) {
                Ok(literal) => {
                    variables.insert(key, literal);
                }
                Err(reason) => {
                    let message = format!("variables.{}: {}", key, reason);
                    return Err(ThemeError::load(name, origin, message));
                }
            }
        }

        let mut values = ThemeValues::default();
        for (key, value) in raw.theme {
            let Some(slot) = values.slot_mut(&key) else {
                tracing::trace!(theme = %name, key = %key, "ignoring unknown theme slot");
                continue;
            };
            match scalar_to_string(value) {
                Ok(text) => *slot = text,
                Err(reason) => {
                    let message = format!("theme.{}: {}", key, reason);
                    return Err(ThemeError::load(name, origin, message));
                }
            }
        }

        Ok(Self {
            name,
            origin,
            version,
            variables,
            values,
        })
    }

    /// Assembles a document from already structured parts.
    pub fn new(
        name: impl Into<String>,
        origin: ThemeOrigin,
        variables: VariableTable,
        values: ThemeValues,
    ) -> Self {
        Self {
            name: name.into(),
            origin,
            version: String::new(),
            variables,
            values,
        }
    }

    /// The theme name, i.e. the file name without extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn origin(&self) -> &ThemeOrigin {
        &self.origin
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// The raw slot values, possibly containing `${name}` references.
    pub fn values(&self) -> &ThemeValues {
        &self.values
    }
}
