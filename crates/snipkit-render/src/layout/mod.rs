//! Screen layout that adapts to the terminal height.
//!
//! [`AdaptiveRenderer`] composes a content block and an optional help block
//! into a [`Frame`], switching between [`LayoutMode::Default`] and
//! [`LayoutMode::Minimized`] margins as the terminal grows or shrinks.

mod margins;
mod renderer;

pub use margins::{LayoutMode, DEFAULT_MARGINS, MINIMIZED_MARGINS};
pub use renderer::{AdaptiveRenderer, Frame, RenderPass};
