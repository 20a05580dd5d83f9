//! Terminal color capability detection.
//!
//! The capability is computed once per process and never changes afterwards.
//! Every color decision downstream receives it as a plain [`ColorCapability`]
//! value, so tests can pass whatever depth they need without touching the
//! process-wide token.
//!
//! ```rust
//! use snipkit_render::ColorCapability;
//!
//! let cap = ColorCapability::from_env(
//!     |key| match key {
//!         "TERM" => Some("xterm-256color".to_string()),
//!         _ => None,
//!     },
//!     true,
//! );
//! assert_eq!(cap, ColorCapability::Extended);
//! ```

use once_cell::sync::OnceCell;

/// Color depth advertised by the host terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorCapability {
    /// No color or emphasis escapes at all.
    None,
    /// The 16 ANSI colors.
    Basic,
    /// The 256-color palette.
    Extended,
    /// 24-bit RGB.
    TrueColor,
}

static CAPABILITY: OnceCell<ColorCapability> = OnceCell::new();

impl ColorCapability {
    /// Derives the capability from environment variables.
    ///
    /// `lookup` returns the value of an environment variable, `is_tty` tells
    /// whether stdout is attached to a terminal. Unrecognized environments
    /// degrade to [`ColorCapability::None`].
    pub fn from_env<F>(lookup: F, is_tty: bool) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if set("NO_COLOR").is_some() {
            return ColorCapability::None;
        }
        let forced = set("CLICOLOR_FORCE").is_some_and(|v| v != "0");
        if !is_tty && !forced {
            return ColorCapability::None;
        }

        let term = set("TERM").unwrap_or_default();
        if term == "dumb" && !forced {
            return ColorCapability::None;
        }

        let detected = match set("COLORTERM").as_deref() {
            Some("truecolor") | Some("24bit") => ColorCapability::TrueColor,
            _ if term.contains("256color") => ColorCapability::Extended,
            _ if !term.is_empty() && term != "dumb" => ColorCapability::Basic,
            _ => ColorCapability::None,
        };

        if forced {
            detected.max(ColorCapability::Basic)
        } else {
            detected
        }
    }

    /// Inspects the real process environment and stdout.
    pub fn detect() -> Self {
        let is_tty = console::Term::stdout().is_term();
        Self::from_env(|key| std::env::var(key).ok(), is_tty)
    }

    /// True when any color escape may be emitted.
    pub fn has_color(self) -> bool {
        self != ColorCapability::None
    }
}

/// Returns the process-wide capability, detecting it on first call.
pub fn color_capability() -> ColorCapability {
    *CAPABILITY.get_or_init(|| {
        let cap = ColorCapability::detect();
        tracing::debug!(capability = ?cap, "detected terminal color capability");
        cap
    })
}

/// Pins the process-wide capability before it is first read.
///
/// Returns `Err` with the already stored value when the token was written
/// before (either by an earlier call or by [`color_capability`]).
pub fn init_color_capability(cap: ColorCapability) -> Result<(), ColorCapability> {
    CAPABILITY.set(cap).map_err(|_| *CAPABILITY.get().unwrap_or(&cap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_truecolor_from_colorterm() {
        let cap = ColorCapability::from_env(
            env(&[("TERM", "xterm-256color"), ("COLORTERM", "truecolor")]),
            true,
        );
        assert_eq!(cap, ColorCapability::TrueColor);

        let cap = ColorCapability::from_env(env(&[("TERM", "xterm"), ("COLORTERM", "24bit")]), true);
        assert_eq!(cap, ColorCapability::TrueColor);
    }

    #[test]
    fn test_256_from_term() {
        let cap = ColorCapability::from_env(env(&[("TERM", "screen-256color")]), true);
        assert_eq!(cap, ColorCapability::Extended);
    }

    #[test]
    fn test_plain_term_is_basic() {
        let cap = ColorCapability::from_env(env(&[("TERM", "xterm")]), true);
        assert_eq!(cap, ColorCapability::Basic);
    }

    #[test]
    fn test_unknown_environment_degrades_to_none() {
        assert_eq!(
            ColorCapability::from_env(env(&[]), true),
            ColorCapability::None
        );
        assert_eq!(
            ColorCapability::from_env(env(&[("TERM", "dumb")]), true),
            ColorCapability::None
        );
    }

    #[test]
    fn test_not_a_tty() {
        let cap = ColorCapability::from_env(env(&[("TERM", "xterm-256color")]), false);
        assert_eq!(cap, ColorCapability::None);
    }

    #[test]
    fn test_no_color_wins() {
        let cap = ColorCapability::from_env(
            env(&[
                ("TERM", "xterm-256color"),
                ("COLORTERM", "truecolor"),
                ("NO_COLOR", "1"),
            ]),
            true,
        );
        assert_eq!(cap, ColorCapability::None);
    }

    #[test]
    fn test_empty_no_color_is_ignored() {
        let cap = ColorCapability::from_env(env(&[("TERM", "xterm"), ("NO_COLOR", "")]), true);
        assert_eq!(cap, ColorCapability::Basic);
    }

    #[test]
    fn test_clicolor_force() {
        let cap = ColorCapability::from_env(env(&[("CLICOLOR_FORCE", "1")]), false);
        assert_eq!(cap, ColorCapability::Basic);

        let cap = ColorCapability::from_env(
            env(&[("CLICOLOR_FORCE", "1"), ("TERM", "xterm-256color")]),
            false,
        );
        assert_eq!(cap, ColorCapability::Extended);

        let cap = ColorCapability::from_env(env(&[("CLICOLOR_FORCE", "0")]), false);
        assert_eq!(cap, ColorCapability::None);
    }

    #[test]
    fn test_ordering() {
        assert!(ColorCapability::None < ColorCapability::Basic);
        assert!(ColorCapability::Extended < ColorCapability::TrueColor);
        assert!(!ColorCapability::None.has_color());
        assert!(ColorCapability::Basic.has_color());
    }

    #[test]
    fn test_process_token_written_once() {
        let first = color_capability();
        assert_eq!(color_capability(), first);
        assert_eq!(init_color_capability(ColorCapability::TrueColor).err(), Some(first));
    }
}
