//! Footer and error banner rendering.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::controller::ErrorBanner;
use crate::theme::Theme;

/// Key hints shown in the footer.
pub const FOOTER_KEYS: &[(&str, &str)] = &[
    ("space", "play/pause"),
    ("←/→", "skip"),
    ("↑/↓", "volume"),
    ("+/-", "rate"),
    ("?", "help"),
    ("q", "quit"),
];

/// Render a centered footer with keybinding hints.
///
/// Takes pairs of (key, description) and joins them with " | " separators.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)], theme: &Theme) {
    let spans = build_footer_spans(keys, theme);
    let footer = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(theme.text_secondary))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Build styled spans for footer keybinding hints.
///
/// Each key is highlighted with the theme accent color, descriptions use
/// the secondary text color, and entries are separated by " | ".
pub fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ".to_string(), theme.text_secondary_style()));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_bold_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            theme.text_secondary_style(),
        ));
    }
    spans
}

/// Render the load-failure banner.
pub fn render_banner(frame: &mut Frame, area: Rect, banner: &ErrorBanner, theme: &Theme) {
    let text = Paragraph::new(format!(" {}", banner.message)).style(theme.error_style());
    frame.render_widget(text, area);
}
