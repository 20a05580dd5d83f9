//! Layout modes and their outer margins.

use crate::style::Spacing;

/// Margins (top, right, bottom, left) when everything fits.
pub const DEFAULT_MARGINS: Spacing = Spacing::new(1, 2, 1, 4);

/// Margins used when the terminal is too short for [`DEFAULT_MARGINS`].
pub const MINIMIZED_MARGINS: Spacing = Spacing::new(0, 2, 0, 4);

/// How much vertical space the frame spends on margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Full margins.
    #[default]
    Default,
    /// No top/bottom margin; left/right margins unchanged.
    Minimized,
}

impl LayoutMode {
    pub fn margins(self) -> Spacing {
        match self {
            LayoutMode::Default => DEFAULT_MARGINS,
            LayoutMode::Minimized => MINIMIZED_MARGINS,
        }
    }

    pub fn is_minimized(self) -> bool {
        self == LayoutMode::Minimized
    }

    /// Picks the mode for a body of `body_height` lines on a terminal of
    /// `available_height` lines. Only the default margins are measured.
    pub fn for_height(body_height: usize, available_height: usize) -> Self {
        if body_height + DEFAULT_MARGINS.vertical() <= available_height {
            LayoutMode::Default
        } else {
            LayoutMode::Minimized
        }
    }
}
