//! Block styles: colors and emphasis plus box spacing around a text block.
//!
//! A [`Style`] is a plain value. Rendering pads every line of the block to a
//! common width, applies padding inside the optional left border and margin
//! outside it, and emits ANSI escapes only when the capability allows color.

use crate::capability::ColorCapability;
use crate::util::text_width;

use super::color::ThemeColor;

/// Thick vertical bar used for left borders.
pub const THICK_LEFT_BORDER: &str = "┃";

/// Per-side spacing, in cells (columns for left/right, lines for top/bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spacing {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Spacing {
    pub const ZERO: Spacing = Spacing::new(0, 0, 0, 0);

    /// Spacing in CSS order: top, right, bottom, left.
    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same spacing on top/bottom and on left/right.
    pub const fn symmetric(vertical: usize, horizontal: usize) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Total vertical extent (top + bottom).
    pub fn vertical(&self) -> usize {
        self.top + self.bottom
    }
}

/// Rendering attributes for one UI element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    capability: ColorCapability,
    foreground: ThemeColor,
    background: ThemeColor,
    bold: bool,
    italic: bool,
    padding: Spacing,
    margin: Spacing,
    left_border: bool,
    border_foreground: ThemeColor,
}

impl Style {
    /// Creates an empty style for the given capability.
    pub fn new(capability: ColorCapability) -> Self {
        Self {
            capability,
            foreground: ThemeColor::Unset,
            background: ThemeColor::Unset,
            bold: false,
            italic: false,
            padding: Spacing::ZERO,
            margin: Spacing::ZERO,
            left_border: false,
            border_foreground: ThemeColor::Unset,
        }
    }

    pub fn foreground(mut self, color: ThemeColor) -> Self {
        self.foreground = color;
        self
    }

    pub fn background(mut self, color: ThemeColor) -> Self {
        self.background = color;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn padding(mut self, padding: Spacing) -> Self {
        self.padding = padding;
        self
    }

    pub fn padding_left(mut self, cells: usize) -> Self {
        self.padding.left = cells;
        self
    }

    pub fn margin(mut self, margin: Spacing) -> Self {
        self.margin = margin;
        self
    }

    pub fn margin_bottom(mut self, lines: usize) -> Self {
        self.margin.bottom = lines;
        self
    }

    /// Draws a thick border on the left side only.
    pub fn left_border(mut self, color: ThemeColor) -> Self {
        self.left_border = true;
        self.border_foreground = color;
        self
    }

    pub fn foreground_color(&self) -> ThemeColor {
        self.foreground
    }

    pub fn background_color(&self) -> ThemeColor {
        self.background
    }

    pub fn border_color(&self) -> ThemeColor {
        self.border_foreground
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn is_italic(&self) -> bool {
        self.italic
    }

    pub fn has_left_border(&self) -> bool {
        self.left_border
    }

    pub fn padding_spacing(&self) -> Spacing {
        self.padding
    }

    pub fn margin_spacing(&self) -> Spacing {
        self.margin
    }

    pub fn capability(&self) -> ColorCapability {
        self.capability
    }

    fn text_style(&self) -> Option<console::Style> {
        if !self.capability.has_color() {
            return None;
        }
        let fg = self.foreground.to_console_color(self.capability);
        let bg = self.background.to_console_color(self.capability);
        if fg.is_none() && bg.is_none() && !self.bold && !self.italic {
            return None;
        }

        let mut style = console::Style::new().force_styling(true);
        if let Some(color) = fg {
            style = style.fg(color);
        }
        if let Some(color) = bg {
            style = style.bg(color);
        }
        if self.bold {
            style = style.bold();
        }
        if self.italic {
            style = style.italic();
        }
        Some(style)
    }

    fn border_glyph(&self) -> String {
        match self.border_foreground.to_console_color(self.capability) {
            Some(color) => console::Style::new()
                .force_styling(true)
                .fg(color)
                .apply_to(THICK_LEFT_BORDER)
                .to_string(),
            None => THICK_LEFT_BORDER.to_string(),
        }
    }

    /// Renders `text` with this style.
    pub fn render(&self, text: &str) -> String {
        let inner_width = text_width(text);
        let padded_width = inner_width + self.padding.left + self.padding.right;
        let text_style = self.text_style();
        let paint = |line: String| match &text_style {
            Some(style) => style.apply_to(line).to_string(),
            None => line,
        };

        let blank = " ".repeat(padded_width);
        let mut lines: Vec<String> = Vec::new();
        lines.extend((0..self.padding.top).map(|_| paint(blank.clone())));
        for line in text.split('\n') {
            let fill = inner_width.saturating_sub(text_width(line));
            lines.push(paint(format!(
                "{}{}{}{}",
                " ".repeat(self.padding.left),
                line,
                " ".repeat(fill),
                " ".repeat(self.padding.right)
            )));
        }
        lines.extend((0..self.padding.bottom).map(|_| paint(blank.clone())));

        if self.left_border {
            let glyph = self.border_glyph();
            for line in &mut lines {
                line.insert_str(0, &glyph);
            }
        }

        apply_margin(&lines.join("\n"), self.margin)
    }
}

/// Surrounds a block with blank space, padding every line to a common width.
pub fn apply_margin(block: &str, margin: Spacing) -> String {
    if margin == Spacing::ZERO {
        return block.to_string();
    }

    let width = text_width(block);
    let full = " ".repeat(width + margin.left + margin.right);
    let mut lines: Vec<String> = Vec::with_capacity(margin.vertical() + 1);
    lines.extend((0..margin.top).map(|_| full.clone()));
    for line in block.split('\n') {
        let fill = width.saturating_sub(text_width(line));
        lines.push(format!(
            "{}{}{}",
            " ".repeat(margin.left),
            line,
            " ".repeat(fill + margin.right)
        ));
    }
    lines.extend((0..margin.bottom).map(|_| full.clone()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_style_is_identity() {
        let style = Style::new(ColorCapability::TrueColor);
        assert_eq!(style.render("hello"), "hello");
    }

    #[test]
    fn test_no_capability_drops_escapes() {
        let style = Style::new(ColorCapability::None)
            .foreground(ThemeColor::Ansi(1))
            .bold(true);
        assert_eq!(style.render("hi"), "hi");
    }

    #[test]
    fn test_colors_and_emphasis_emit_ansi() {
        let style = Style::new(ColorCapability::Basic)
            .foreground(ThemeColor::Ansi(1))
            .bold(true);
        let out = style.render("hi");
        assert!(out.contains("\x1b[31m"), "got {:?}", out);
        assert!(out.contains("\x1b[1m"), "got {:?}", out);
        assert_eq!(console::strip_ansi_codes(&out), "hi");
    }

    #[test]
    fn test_padding_pads_lines_to_common_width() {
        let style = Style::new(ColorCapability::None).padding(Spacing::symmetric(0, 1));
        assert_eq!(style.render("a\nabc"), " a   \n abc ");
    }

    #[test]
    fn test_left_border_and_padding() {
        let style = Style::new(ColorCapability::None)
            .left_border(ThemeColor::Ansi(4))
            .padding_left(1);
        assert_eq!(style.render("one\ntwo"), "┃ one\n┃ two");
    }

    #[test]
    fn test_margin_bottom_adds_line() {
        let style = Style::new(ColorCapability::None).margin_bottom(1);
        assert_eq!(style.render("title"), "title\n     ");
    }

    #[test]
    fn test_apply_margin_all_sides() {
        let out = apply_margin("ab", Spacing::new(1, 2, 1, 4));
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "    ab  ");
        assert_eq!(lines[0], " ".repeat(8));
    }

    #[test]
    fn test_apply_zero_margin_is_identity() {
        assert_eq!(apply_margin("x\ny", Spacing::ZERO), "x\ny");
    }
}
