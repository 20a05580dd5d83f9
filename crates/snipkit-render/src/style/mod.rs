//! Colors, block styles and the per-element style engine.
//!
//! - [`color`]: parsing color literals and downsampling them to the terminal
//! - [`block`]: the [`Style`] value and its rendering
//! - [`engine`]: [`Styler`], one style per UI element kind

pub mod block;
pub mod color;
pub mod engine;

pub use block::{apply_margin, Spacing, Style, THICK_LEFT_BORDER};
pub use color::ThemeColor;
pub use engine::{Palette, Styler};
