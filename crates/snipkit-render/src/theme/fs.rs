//! Filesystem access used by the theme loader.
//!
//! The loader only needs three operations, so they sit behind [`ThemeFs`].
//! [`OsFs`] talks to the real filesystem; tests can point it at a temporary
//! directory or provide their own implementation.

use std::io;
use std::path::Path;

/// The filesystem operations the theme loader depends on.
pub trait ThemeFs {
    /// True when `path` exists and is a directory.
    fn dir_exists(&self, path: &Path) -> bool;

    /// File names (not paths) of the regular files directly inside `path`,
    /// sorted. Names that are not valid UTF-8 are omitted.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Reads a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// [`ThemeFs`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl ThemeFs for OsFs {
    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => {
                    tracing::trace!(name = ?raw, "skipping non UTF-8 file name");
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

impl<T: ThemeFs + ?Sized> ThemeFs for &T {
    fn dir_exists(&self, path: &Path) -> bool {
        (**self).dir_exists(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        (**self).read_dir(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }
}
