//! Theme documents compiled into the binary.
//!
//! Bundled documents live under the crate's `themes/` directory and are
//! embedded with `include_str!`, so a release binary needs no theme files on
//! disk. Entries are `(file_name, content)` pairs; the theme name is the file
//! name without its `.yaml`/`.yml` extension.

/// Theme documents shipped with snipkit.
const BUILTIN_THEMES: &[(&str, &str)] = &[
    ("default.yaml", include_str!("../../themes/default.yaml")),
    ("dracula.yaml", include_str!("../../themes/dracula.yaml")),
    ("simple.yaml", include_str!("../../themes/simple.yaml")),
];

/// A set of embedded theme documents.
#[derive(Debug, Clone, Copy)]
pub struct BundledThemes {
    entries: &'static [(&'static str, &'static str)],
}

impl BundledThemes {
    /// The documents shipped with the crate.
    pub const fn builtin() -> Self {
        Self {
            entries: BUILTIN_THEMES,
        }
    }

    /// A custom set, typically used by tests or hosts shipping their own themes.
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// No bundled documents at all.
    pub const fn empty() -> Self {
        Self { entries: &[] }
    }

    /// Returns the embedded entries.
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }
}

impl Default for BundledThemes {
    fn default() -> Self {
        Self::builtin()
    }
}
