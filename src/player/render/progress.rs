//! Progress track rendering.
//!
//! The filled length comes from the control surface, never from the element
//! directly, so the track shows exactly what the controller last computed.

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::PlayerView;
use crate::player::layout::ControlsLayout;
use crate::theme::Theme;

/// Playhead marker drawn at the fill boundary.
pub const PLAYHEAD: char = '⏺';

/// Format a time in seconds to MM:SS format.
///
/// Unknown or infinite times render as `--:--`.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "--:--".to_string();
    }
    let total_secs = seconds as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Build the track cells for a fill fraction.
///
/// Returns the cells and the number of filled cells. The playhead sits on
/// the first unfilled cell.
pub fn build_track_cells(bar_width: usize, fill_fraction: f64) -> (Vec<char>, usize) {
    let fraction = if fill_fraction.is_nan() {
        0.0
    } else {
        fill_fraction.clamp(0.0, 1.0)
    };
    let filled = (bar_width as f64 * fraction) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];
    for cell in bar.iter_mut().take(filled) {
        *cell = '━';
    }
    if filled < bar_width {
        bar[filled] = PLAYHEAD;
    }

    (bar, filled)
}

/// Render the track and the time display.
pub fn render_progress(frame: &mut Frame, layout: &ControlsLayout, view: &PlayerView, theme: &Theme) {
    let (bar, filled) = build_track_cells(
        layout.track.width as usize,
        view.surface.progress.fill_fraction(),
    );

    let played: String = bar[..filled].iter().collect();
    let rest: String = bar[filled..].iter().collect();
    let track = Line::from(vec![
        Span::styled(played, theme.played_style()),
        Span::styled(rest, theme.text_secondary_style()),
    ]);
    frame.render_widget(Paragraph::new(track), layout.track);

    let time = format!(
        " {} / {}",
        format_duration(view.current_time),
        format_duration(view.duration)
    );
    frame.render_widget(
        Paragraph::new(time).style(Style::default().fg(theme.text_primary)),
        layout.time,
    );
}
