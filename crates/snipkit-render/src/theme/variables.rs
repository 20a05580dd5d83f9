//! `${name}` substitution for theme slots.
//!
//! Only a slot whose whole value is a reference is substituted; anything
//! else passes through untouched. Variable values are never scanned again,
//! so references cannot form cycles.

use crate::error::ThemeError;

use super::document::{ThemeDocument, ThemeValues};

/// Returns the variable name when `value` is exactly `${name}`.
///
/// Names never span lines; a value with a line break is a plain literal.
pub fn variable_reference(value: &str) -> Option<&str> {
    value
        .strip_prefix("${")?
        .strip_suffix('}')
        .filter(|name| !name.contains('\n'))
}

/// Substitutes every variable reference in the document's slots.
///
/// # Errors
///
/// Returns [`ThemeError::UndefinedVariable`] for the first slot (in slot
/// table order) that references a name missing from the variable table.
/// No partially resolved values are returned.
pub fn resolve_variables(document: &ThemeDocument) -> Result<ThemeValues, ThemeError> {
    let variables = document.variables();
    let mut resolved = document.values().clone();

    for (key, slot) in resolved.slots_mut() {
        let Some(name) = variable_reference(slot) else {
            continue;
        };
        match variables.get(name) {
            Some(literal) => {
                tracing::trace!(theme = document.name(), slot = key, variable = name, "resolved theme variable");
                *slot = literal.clone();
            }
            None => {
                return Err(ThemeError::UndefinedVariable {
                    theme: document.name().to_string(),
                    variable: name.to_string(),
                })
            }
        }
    }

    Ok(resolved)
}
