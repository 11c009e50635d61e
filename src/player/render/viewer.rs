//! Viewer area: what the media element is doing right now.

use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::PlayerView;
use crate::player::layout::ControlsLayout;
use crate::theme::Theme;

/// One-word playback state for the viewer.
pub fn state_label(view: &PlayerView) -> &'static str {
    if view.surface.load_failed() {
        "failed"
    } else if view.paused {
        "paused"
    } else {
        "playing"
    }
}

pub fn render_viewer(frame: &mut Frame, layout: &ControlsLayout, view: &PlayerView, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", view.source))
        .border_style(theme.text_secondary_style());

    let inner_height = layout.viewer.height.saturating_sub(2);
    let mut lines = Vec::new();
    // Vertically center the two status lines
    for _ in 0..inner_height.saturating_sub(2) / 2 {
        lines.push(Line::from(""));
    }
    let state_style = if view.surface.load_failed() {
        theme.error_style()
    } else {
        theme.accent_bold_style()
    };
    lines.push(Line::from(Span::styled(state_label(view), state_style)));
    lines.push(Line::from(Span::styled(
        format!(
            "volume {:.2}  ·  rate {:.2}x",
            view.volume, view.playback_rate
        ),
        theme.text_secondary_style(),
    )));

    let viewer = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(viewer, layout.viewer);
}
