//! Frame composition that adapts to the terminal height.
//!
//! Each [`AdaptiveRenderer::render`] call measures the content and help
//! blocks against the default margins. When they do not fit, the frame drops
//! its top and bottom margins. A change of mode raises the resize-needed
//! signal: the caller should clear the terminal before painting, since a
//! partial redraw across a margin change leaves stale glyphs behind. The
//! signal stays raised until the caller takes it, or until a render pass
//! flagged as [`RenderPass::ForcedResize`] completes.
//!
//! Slack between the frame and the terminal height is filled with blank
//! lines between content and help, keeping one line in reserve so the frame
//! never reaches the last row.

use std::fmt;

use crate::style::apply_margin;
use crate::util::text_height;

use super::margins::LayoutMode;

/// Whether a render call is an ordinary paint or the redraw issued in
/// response to the resize-needed signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPass {
    #[default]
    Normal,
    /// The redraw following a terminal clear. Mode changes on this pass do
    /// not raise the signal, and the signal is cleared once the pass ends.
    ForcedResize,
}

/// A composed frame ready to be written to the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    text: String,
    mode: LayoutMode,
    filler_lines: usize,
    mode_changed: bool,
}

impl Frame {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Layout mode the frame was composed with.
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Blank lines inserted between content and help.
    pub fn filler_lines(&self) -> usize {
        self.filler_lines
    }

    /// True when this render switched the layout mode.
    pub fn mode_changed(&self) -> bool {
        self.mode_changed
    }

    /// Number of lines in the frame.
    pub fn height(&self) -> usize {
        text_height(&self.text)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Render state for one screen.
///
/// Owned by a single screen and driven from one thread; hosts needing
/// several screens create one renderer each.
#[derive(Debug, Clone, Default)]
pub struct AdaptiveRenderer {
    width: u16,
    height: u16,
    show_help: bool,
    minimized: bool,
    resize_needed: bool,
}

impl AdaptiveRenderer {
    pub fn new(show_help: bool) -> Self {
        Self {
            show_help,
            ..Default::default()
        }
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.set_size(width, height);
        self
    }

    /// Stores the terminal size. Only the height drives the layout; the width
    /// is kept for callers that wrap their own content.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Updates the stored size from the controlling terminal.
    ///
    /// Returns `false`, leaving the size untouched, when stdout is not a terminal.
    pub fn sync_terminal_size(&mut self) -> bool {
        match terminal_size::terminal_size() {
            Some((terminal_size::Width(w), terminal_size::Height(h))) => {
                self.set_size(w, h);
                true
            }
            None => false,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn set_show_help(&mut self, show_help: bool) {
        self.show_help = show_help;
    }

    pub fn mode(&self) -> LayoutMode {
        if self.minimized {
            LayoutMode::Minimized
        } else {
            LayoutMode::Default
        }
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    /// True when the layout mode changed and nobody reacted yet.
    pub fn resize_needed(&self) -> bool {
        self.resize_needed
    }

    /// Returns the resize-needed signal and clears it.
    pub fn take_resize_needed(&mut self) -> bool {
        std::mem::take(&mut self.resize_needed)
    }

    pub fn clear_resize_needed(&mut self) {
        self.resize_needed = false;
    }

    /// Lines the content and help need under the default margins.
    pub fn required_height(&self, content: &str, help: Option<&str>) -> usize {
        self.body_height(content, help) + LayoutMode::Default.margins().vertical()
    }

    fn visible_help<'a>(&self, help: Option<&'a str>) -> Option<&'a str> {
        help.filter(|_| self.show_help)
    }

    fn body_height(&self, content: &str, help: Option<&str>) -> usize {
        text_height(content) + self.visible_help(help).map_or(0, text_height)
    }

    /// Composes a frame for the current terminal size.
    pub fn render(&mut self, content: &str, help: Option<&str>, pass: RenderPass) -> Frame {
        let available = usize::from(self.height);
        let body_height = self.body_height(content, help);

        let mode = LayoutMode::for_height(body_height, available);
        let mode_changed = mode.is_minimized() != self.minimized;
        if mode_changed {
            self.minimized = mode.is_minimized();
            if pass != RenderPass::ForcedResize {
                self.resize_needed = true;
            }
            tracing::debug!(?mode, available, body_height, "layout mode changed");
        }

        let margins = mode.margins();
        let required = body_height + margins.vertical();
        let filler_lines = available.saturating_sub(required + 1);

        let mut sections: Vec<&str> = Vec::with_capacity(filler_lines + 2);
        sections.push(content);
        sections.extend(std::iter::repeat("").take(filler_lines));
        if let Some(help) = self.visible_help(help) {
            sections.push(help);
        }
        let text = apply_margin(&sections.join("\n"), margins);

        if pass == RenderPass::ForcedResize {
            self.resize_needed = false;
        }

        Frame {
            text,
            mode,
            filler_lines,
            mode_changed,
        }
    }

    /// Wraps a form field, separating it from the next one by a blank line
    /// unless the layout is minimized.
    pub fn field_wrapper(&self, field: &str) -> String {
        if self.minimized {
            field.to_string()
        } else {
            let width = crate::util::text_width(field);
            format!("{}\n{}", field, " ".repeat(width))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(lines: usize) -> String {
        (0..lines)
            .map(|i| format!("line {}", i))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_fits_uses_default_margins() {
        let content = block(5);
        let mut renderer = AdaptiveRenderer::new(true).with_size(80, 20);
        let frame = renderer.render(&content, Some("help"), RenderPass::Normal);

        assert_eq!(frame.mode(), LayoutMode::Default);
        assert!(!frame.mode_changed());
        assert!(!renderer.resize_needed());
        // 5 content + 1 help + 2 margins = 8; 20 - 8 - 1 = 11
        assert_eq!(frame.filler_lines(), 11);
        assert_eq!(frame.height(), 19);
    }

    #[test]
    fn test_frame_layout() {
        let mut renderer = AdaptiveRenderer::new(true).with_size(20, 6);
        let frame = renderer.render("ab", Some("?"), RenderPass::Normal);
        // 1 + 1 + 2 = 4 required, 6 - 4 - 1 = 1 filler line
        let lines: Vec<&str> = frame.as_str().split('\n').collect();
        assert_eq!(
            lines,
            vec!["        ", "    ab  ", "        ", "    ?   ", "        "]
        );
    }

    #[test]
    fn test_exact_fit_has_no_filler() {
        let content = block(3);
        let mut renderer = AdaptiveRenderer::new(true).with_size(80, 6);
        let frame = renderer.render(&content, Some("help"), RenderPass::Normal);
        assert_eq!(frame.mode(), LayoutMode::Default);
        assert_eq!(frame.filler_lines(), 0);
        assert_eq!(frame.height(), 6);
    }

    #[test]
    fn test_too_short_minimizes() {
        let content = block(5);
        let mut renderer = AdaptiveRenderer::new(true).with_size(80, 6);
        let frame = renderer.render(&content, Some("help"), RenderPass::Normal);

        assert_eq!(frame.mode(), LayoutMode::Minimized);
        assert!(frame.mode_changed());
        assert!(renderer.resize_needed());
        assert_eq!(frame.filler_lines(), 0);
        assert_eq!(frame.height(), 6);
    }

    #[test]
    fn test_hidden_help_is_not_measured() {
        let content = block(4);
        let mut renderer = AdaptiveRenderer::new(false).with_size(80, 6);
        let frame = renderer.render(&content, Some("one\ntwo"), RenderPass::Normal);
        assert_eq!(frame.mode(), LayoutMode::Default);
        assert!(!frame.as_str().contains("one"));
        assert_eq!(renderer.required_height(&content, Some("one\ntwo")), 6);
    }

    #[test]
    fn test_forced_resize_pass_clears_signal() {
        let content = block(5);
        let mut renderer = AdaptiveRenderer::new(true).with_size(80, 6);
        renderer.render(&content, Some("help"), RenderPass::Normal);
        assert!(renderer.resize_needed());

        let frame = renderer.render(&content, Some("help"), RenderPass::ForcedResize);
        assert!(!frame.mode_changed());
        assert!(!renderer.resize_needed());
    }

    #[test]
    fn test_forced_resize_pass_does_not_raise_signal() {
        let content = block(5);
        let mut renderer = AdaptiveRenderer::new(true).with_size(80, 6);
        let frame = renderer.render(&content, Some("help"), RenderPass::ForcedResize);
        assert!(frame.mode_changed());
        assert!(renderer.is_minimized());
        assert!(!renderer.resize_needed());
    }

    #[test]
    fn test_signal_is_not_self_resetting() {
        let content = block(5);
        let mut renderer = AdaptiveRenderer::new(true).with_size(80, 6);
        renderer.render(&content, Some("help"), RenderPass::Normal);
        renderer.render(&content, Some("help"), RenderPass::Normal);
        assert!(renderer.resize_needed());
        assert!(renderer.take_resize_needed());
        assert!(!renderer.resize_needed());
    }

    #[test]
    fn test_zero_height_is_clamped() {
        let mut renderer = AdaptiveRenderer::new(true);
        let frame = renderer.render("content", Some("help"), RenderPass::Normal);
        assert_eq!(frame.mode(), LayoutMode::Minimized);
        assert_eq!(frame.filler_lines(), 0);
        assert_eq!(frame.height(), 2);
    }

    #[test]
    fn test_field_wrapper_spacing_follows_mode() {
        let mut renderer = AdaptiveRenderer::new(true).with_size(80, 40);
        renderer.render("x", None, RenderPass::Normal);
        assert_eq!(renderer.field_wrapper("field"), "field\n     ");

        renderer.set_size(80, 1);
        renderer.render("x\ny", None, RenderPass::Normal);
        assert_eq!(renderer.field_wrapper("field"), "field");
    }

    #[test]
    fn test_frame_display_matches_text() {
        let mut renderer = AdaptiveRenderer::new(false).with_size(10, 3);
        let frame = renderer.render("x", None, RenderPass::Normal);
        assert_eq!(frame.to_string(), frame.as_str());
        assert_eq!(frame.clone().into_string(), frame.to_string());
    }

    #[test]
    fn test_width_does_not_affect_layout() {
        let content = block(3);
        let mut narrow = AdaptiveRenderer::new(true).with_size(4, 12);
        let mut wide = AdaptiveRenderer::new(true).with_size(200, 12);

        let a = narrow.render(&content, Some("help"), RenderPass::Normal);
        let b = wide.render(&content, Some("help"), RenderPass::Normal);
        assert_eq!(a, b);
        assert_eq!(narrow.width(), 4);
    }
}
