//! Per-element styles derived from a resolved theme.
//!
//! [`Styler`] parses the theme's slots once and hands out one [`Style`] per
//! kind of UI element. Every operation is pure: the same theme and
//! capability always produce the same style.
//!
//! ```rust
//! use snipkit_render::{ColorCapability, Styler, ThemeColor, ThemeValues};
//!
//! let values = ThemeValues {
//!     active_color: "#F25D94".into(),
//!     subdued_color: "#A49FA5".into(),
//!     ..Default::default()
//! };
//! let styler = Styler::new(&values, ColorCapability::TrueColor);
//!
//! assert_eq!(styler.button_style(true).background_color(), ThemeColor::Rgb(242, 93, 148));
//! assert_eq!(styler.button_style(false).background_color(), ThemeColor::Rgb(164, 159, 165));
//! ```

use crate::capability::ColorCapability;
use crate::theme::ThemeValues;

use super::block::{Spacing, Style};
use super::color::ThemeColor;

/// Parsed colors of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    pub title: ThemeColor,
    pub title_contrast: ThemeColor,
    pub border: ThemeColor,
    pub text: ThemeColor,
    pub placeholder: ThemeColor,
    pub active: ThemeColor,
    pub active_contrast: ThemeColor,
    pub info: ThemeColor,
    pub highlight: ThemeColor,
    pub highlight_contrast: ThemeColor,
    pub success: ThemeColor,
    pub error: ThemeColor,
    pub snippet: ThemeColor,
    pub snippet_contrast: ThemeColor,
    pub subdued: ThemeColor,
    pub subdued_contrast: ThemeColor,
    pub very_subdued: ThemeColor,
    pub very_subdued_contrast: ThemeColor,
}

impl Palette {
    /// Parses every color slot. Unparseable values become [`ThemeColor::Unset`].
    pub fn from_values(values: &ThemeValues) -> Self {
        let parse = |slot: &str, value: &str| ThemeColor::parse_lenient(slot, value);
        let subdued = parse("subduedColor", &values.subdued_color);
        let placeholder = match parse("placeholderColor", &values.placeholder_color) {
            ThemeColor::Unset => subdued,
            color => color,
        };

        Self {
            title: parse("titleColor", &values.title_color),
            title_contrast: parse("titleContrastColor", &values.title_contrast_color),
            border: parse("borderColor", &values.border_color),
            text: parse("textColor", &values.text_color),
            placeholder,
            active: parse("activeColor", &values.active_color),
            active_contrast: parse("activeContrastColor", &values.active_contrast_color),
            info: parse("infoColor", &values.info_color),
            highlight: parse("highlightColor", &values.highlight_color),
            highlight_contrast: parse("highlightContrastColor", &values.highlight_contrast_color),
            success: parse("successColor", &values.success_color),
            error: parse("errorColor", &values.error_color),
            snippet: parse("snippetColor", &values.snippet_color),
            snippet_contrast: parse("snippetContrastColor", &values.snippet_contrast_color),
            subdued,
            subdued_contrast: parse("subduedContrastColor", &values.subdued_contrast_color),
            very_subdued: parse("verySubduedColor", &values.very_subdued_color),
            very_subdued_contrast: parse(
                "verySubduedContrastColor",
                &values.very_subdued_contrast_color,
            ),
        }
    }
}

/// Builds styles for the picker's UI elements.
#[derive(Debug, Clone)]
pub struct Styler {
    palette: Palette,
    capability: ColorCapability,
    preview_color_scheme: String,
}

impl Styler {
    pub fn new(values: &ThemeValues, capability: ColorCapability) -> Self {
        Self {
            palette: Palette::from_values(values),
            capability,
            preview_color_scheme: values.preview_color_scheme_name.clone(),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn capability(&self) -> ColorCapability {
        self.capability
    }

    /// Syntax-highlighting scheme for snippet previews.
    pub fn preview_color_scheme_name(&self) -> &str {
        &self.preview_color_scheme
    }

    fn base(&self) -> Style {
        Style::new(self.capability)
    }

    /// Screen titles: contrast text on the title color, bold and italic,
    /// followed by one blank line.
    pub fn title_style(&self) -> Style {
        self.base()
            .background(self.palette.title)
            .foreground(self.palette.title_contrast)
            .bold(true)
            .italic(true)
            .padding(Spacing::symmetric(0, 1))
            .margin_bottom(1)
    }

    /// Parameter prompt labels.
    pub fn prompt_label_style(&self) -> Style {
        self.base()
            .bold(true)
            .foreground(self.palette.title)
            .left_border(self.palette.border)
            .padding_left(1)
    }

    /// Parameter descriptions under a prompt label.
    pub fn prompt_description_style(&self) -> Style {
        self.base()
            .italic(true)
            .foreground(self.palette.placeholder)
            .left_border(self.palette.border)
            .padding_left(1)
    }

    /// Indentation for input widgets, aligned with prompt labels.
    pub fn input_indent_style(&self) -> Style {
        self.base().left_border(self.palette.border).padding_left(1)
    }

    /// Help text next to an input.
    pub fn input_help_style(&self) -> Style {
        self.base().foreground(self.palette.placeholder)
    }

    /// Buttons: the active pair when selected, the subdued pair otherwise.
    pub fn button_style(&self, selected: bool) -> Style {
        self.base()
            .background(self.button_color(selected))
            .foreground(self.button_text_color(selected))
            .padding(Spacing::symmetric(0, 1))
    }

    pub fn title(&self, text: &str) -> String {
        self.title_style().render(text)
    }

    pub fn prompt_label(&self, text: &str) -> String {
        self.prompt_label_style().render(text)
    }

    pub fn prompt_description(&self, text: &str) -> String {
        self.prompt_description_style().render(text)
    }

    pub fn input_indent(&self, text: &str) -> String {
        self.input_indent_style().render(text)
    }

    pub fn input_help(&self, text: &str) -> String {
        self.input_help_style().render(text)
    }

    pub fn button(&self, text: &str, selected: bool) -> String {
        self.button_style(selected).render(text)
    }

    pub fn button_color(&self, selected: bool) -> ThemeColor {
        if selected {
            self.palette.active
        } else {
            self.palette.subdued
        }
    }

    pub fn button_text_color(&self, selected: bool) -> ThemeColor {
        if selected {
            self.palette.active_contrast
        } else {
            self.palette.subdued_contrast
        }
    }

    pub fn title_color(&self) -> ThemeColor {
        self.palette.title
    }

    pub fn title_contrast_color(&self) -> ThemeColor {
        self.palette.title_contrast
    }

    pub fn border_color(&self) -> ThemeColor {
        self.palette.border
    }

    pub fn text_color(&self) -> ThemeColor {
        self.palette.text
    }

    pub fn placeholder_color(&self) -> ThemeColor {
        self.palette.placeholder
    }

    pub fn active_color(&self) -> ThemeColor {
        self.palette.active
    }

    pub fn active_contrast_color(&self) -> ThemeColor {
        self.palette.active_contrast
    }

    pub fn info_color(&self) -> ThemeColor {
        self.palette.info
    }

    pub fn highlight_color(&self) -> ThemeColor {
        self.palette.highlight
    }

    pub fn highlight_contrast_color(&self) -> ThemeColor {
        self.palette.highlight_contrast
    }

    pub fn success_color(&self) -> ThemeColor {
        self.palette.success
    }

    pub fn error_color(&self) -> ThemeColor {
        self.palette.error
    }

    pub fn snippet_color(&self) -> ThemeColor {
        self.palette.snippet
    }

    pub fn snippet_contrast_color(&self) -> ThemeColor {
        self.palette.snippet_contrast
    }

    pub fn subdued_color(&self) -> ThemeColor {
        self.palette.subdued
    }

    pub fn subdued_contrast_color(&self) -> ThemeColor {
        self.palette.subdued_contrast
    }

    pub fn very_subdued_color(&self) -> ThemeColor {
        self.palette.very_subdued
    }

    pub fn very_subdued_contrast_color(&self) -> ThemeColor {
        self.palette.very_subdued_contrast
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> ThemeValues {
        ThemeValues {
            title_color: "#7D56F4".into(),
            title_contrast_color: "#FFFDF5".into(),
            border_color: "#874BFD".into(),
            text_color: "white".into(),
            active_color: "#F25D94".into(),
            active_contrast_color: "#FFFFFF".into(),
            subdued_color: "#A49FA5".into(),
            subdued_contrast_color: "#1A1A1A".into(),
            preview_color_scheme_name: "friendly".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_button_selected_uses_active_pair() {
        let styler = Styler::new(&fixture(), ColorCapability::TrueColor);
        let style = styler.button_style(true);
        assert_eq!(style.background_color(), ThemeColor::Rgb(0xF2, 0x5D, 0x94));
        assert_eq!(style.foreground_color(), ThemeColor::Rgb(0xFF, 0xFF, 0xFF));
    }

    #[test]
    fn test_button_unselected_uses_subdued_pair() {
        let styler = Styler::new(&fixture(), ColorCapability::TrueColor);
        let style = styler.button_style(false);
        assert_eq!(style.background_color(), ThemeColor::Rgb(0xA4, 0x9F, 0xA5));
        assert_eq!(style.foreground_color(), ThemeColor::Rgb(0x1A, 0x1A, 0x1A));
    }

    #[test]
    fn test_title_style() {
        let styler = Styler::new(&fixture(), ColorCapability::TrueColor);
        let style = styler.title_style();
        assert!(style.is_bold());
        assert!(style.is_italic());
        assert_eq!(style.background_color(), styler.title_color());
        assert_eq!(style.foreground_color(), styler.title_contrast_color());
        assert_eq!(style.margin_spacing(), Spacing::new(0, 0, 1, 0));
        assert_eq!(style.padding_spacing(), Spacing::new(0, 1, 0, 1));
    }

    #[test]
    fn test_prompt_styles_have_left_border() {
        let styler = Styler::new(&fixture(), ColorCapability::TrueColor);
        for style in [
            styler.prompt_label_style(),
            styler.prompt_description_style(),
            styler.input_indent_style(),
        ] {
            assert!(style.has_left_border());
            assert_eq!(style.border_color(), styler.border_color());
            assert_eq!(style.padding_spacing().left, 1);
        }
        assert!(styler.prompt_label_style().is_bold());
        assert!(styler.prompt_description_style().is_italic());
    }

    #[test]
    fn test_placeholder_falls_back_to_subdued() {
        let styler = Styler::new(&fixture(), ColorCapability::TrueColor);
        assert_eq!(styler.placeholder_color(), styler.subdued_color());
        assert_eq!(
            styler.prompt_description_style().foreground_color(),
            styler.subdued_color()
        );

        let values = ThemeValues {
            placeholder_color: "red".into(),
            ..fixture()
        };
        let styler = Styler::new(&values, ColorCapability::TrueColor);
        assert_eq!(styler.placeholder_color(), ThemeColor::Ansi(1));
        assert_eq!(styler.input_help_style().foreground_color(), ThemeColor::Ansi(1));
    }

    #[test]
    fn test_styles_are_referentially_transparent() {
        let a = Styler::new(&fixture(), ColorCapability::Extended);
        let b = Styler::new(&fixture(), ColorCapability::Extended);
        assert_eq!(a.title_style(), b.title_style());
        assert_eq!(a.button("OK", true), b.button("OK", true));
    }

    #[test]
    fn test_rendering_without_color() {
        let styler = Styler::new(&fixture(), ColorCapability::None);
        assert_eq!(styler.title("Snippets"), " Snippets \n          ");
        assert_eq!(styler.prompt_label("Name"), "┃ Name");
        assert_eq!(styler.button("OK", true), " OK ");
        assert_eq!(styler.input_help("esc to quit"), "esc to quit");
    }

    #[test]
    fn test_rendering_with_color_emits_escapes() {
        let styler = Styler::new(&fixture(), ColorCapability::Extended);
        let out = styler.button("OK", true);
        assert!(out.contains("\x1b["), "got {:?}", out);
        assert_eq!(console::strip_ansi_codes(&out), " OK ");
    }

    #[test]
    fn test_invalid_color_degrades_to_unset() {
        let values = ThemeValues {
            error_color: "not-a-color".into(),
            ..fixture()
        };
        let styler = Styler::new(&values, ColorCapability::TrueColor);
        assert!(styler.error_color().is_unset());
    }

    #[test]
    fn test_preview_color_scheme_name() {
        let styler = Styler::new(&fixture(), ColorCapability::None);
        assert_eq!(styler.preview_color_scheme_name(), "friendly");
    }

    #[test]
    fn test_truecolor_button_emits_rgb_escape() {
        let values = ThemeValues {
            active_color: "#F25D94".into(),
            ..Default::default()
        };
        let truecolor = Styler::new(&values, ColorCapability::TrueColor).button("OK", true);
        let extended = Styler::new(&values, ColorCapability::Extended).button("OK", true);

        assert!(truecolor.contains("48;2;242;93;148"), "got {:?}", truecolor);
        assert!(extended.contains("48;5;"), "got {:?}", extended);
        assert_ne!(truecolor, extended);
    }
}
