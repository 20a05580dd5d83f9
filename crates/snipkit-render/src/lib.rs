//! # snipkit-render - Themed, height-adaptive terminal screens
//!
//! `snipkit-render` is the presentation layer of the snipkit snippet picker.
//! It turns a theme name into concrete terminal styles and composes screen
//! frames whose margins adapt to the terminal height.
//!
//! ## Core Concepts
//!
//! - [`ColorCapability`]: what the terminal can display, detected once per process
//! - [`ThemeStore`]: finds a theme document (user overrides first, then the
//!   bundled set), resolves its `${name}` variables, falls back to `default`
//! - [`Styler`]: one [`Style`] per UI element kind, colored from a [`ThemeValues`]
//! - [`AdaptiveRenderer`]: lays out content and help, dropping vertical margins
//!   when the terminal is too short and signalling when a full redraw is due
//! - [`UiConfig`]: the host's UI settings, wiring all of the above
//!
//! ## Quick Start
//!
//! ```rust
//! use snipkit_render::{
//!     AdaptiveRenderer, BundledThemes, ColorCapability, OsFs, RenderPass, Styler,
//!     ThemeLoader, ThemeStore,
//! };
//!
//! let store = ThemeStore::new(ThemeLoader::with_fs(OsFs, BundledThemes::builtin(), None));
//! let values = store.get("simple").unwrap();
//! let styler = Styler::new(&values, ColorCapability::None);
//!
//! let content = format!(
//!     "{}\n{}",
//!     styler.title("Parameters"),
//!     styler.prompt_label("Name")
//! );
//!
//! let mut renderer = AdaptiveRenderer::new(true).with_size(60, 12);
//! let frame = renderer.render(&content, Some("enter: apply"), RenderPass::Normal);
//! assert!(!renderer.resize_needed());
//! assert_eq!(frame.height(), 11);
//! ```
//!
//! ## Resize Protocol
//!
//! When a render switches between full and minimized margins, the renderer
//! raises [`AdaptiveRenderer::resize_needed`]. The host clears the screen and
//! renders again with [`RenderPass::ForcedResize`], which lowers the signal.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (theme fallbacks, layout mode changes,
//! unparseable colors) and never installs a subscriber.

pub mod capability;
pub mod config;
mod error;
pub mod layout;
pub mod style;
pub mod theme;
mod util;

pub use capability::{color_capability, init_color_capability, ColorCapability};
pub use config::{UiConfig, SNIPKIT_HOME_ENV};
pub use error::{ConfigError, ThemeError, ThemeOrigin};

// Layout
pub use layout::{
    AdaptiveRenderer, Frame, LayoutMode, RenderPass, DEFAULT_MARGINS, MINIMIZED_MARGINS,
};

// Styling
pub use style::{apply_margin, Palette, Spacing, Style, Styler, ThemeColor, THICK_LEFT_BORDER};

// Themes
pub use theme::{
    extension_priority, resolve_variables, theme_name_of, variable_reference, BundledThemes,
    OsFs, ThemeDocument, ThemeFs, ThemeLoader, ThemeStore, ThemeValues, VariableTable,
    DEFAULT_THEME, THEME_EXTENSIONS,
};

// Utility exports
pub use util::{rgb_to_ansi16, rgb_to_ansi256, text_height, text_width};
