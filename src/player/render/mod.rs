//! Rendering components for the player.
//!
//! This module draws the viewer, progress track, control row, error banner,
//! footer and help overlay. Rendering only reads state: the control surface
//! as the controller left it, plus a few element readings for display.

mod controls;
mod help;
mod progress;
mod status;
mod viewer;

pub use controls::{render_controls, slider_bar, slider_value_text, toggle_text};
pub use help::{help_area, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use progress::{build_track_cells, format_duration, render_progress, PLAYHEAD};
pub use status::{build_footer_spans, render_banner, render_footer, FOOTER_KEYS};
pub use viewer::{render_viewer, state_label};

use ratatui::Frame;

use crate::controller::ControlSurface;
use crate::player::layout::ControlsLayout;
use crate::theme::Theme;

/// Snapshot of everything a frame needs.
#[derive(Debug, Clone, Copy)]
pub struct PlayerView<'a> {
    pub surface: &'a ControlSurface,
    /// Display name of the media source
    pub source: &'a str,
    pub current_time: f64,
    pub duration: f64,
    pub paused: bool,
    pub volume: f64,
    pub playback_rate: f64,
    pub show_help: bool,
}

/// Draw a full frame.
pub fn draw(frame: &mut Frame, layout: &ControlsLayout, view: &PlayerView, theme: &Theme) {
    render_viewer(frame, layout, view, theme);
    if let Some(banner) = &view.surface.banner {
        render_banner(frame, layout.banner, banner, theme);
    }
    render_progress(frame, layout, view, theme);
    render_controls(frame, layout, view, theme);
    render_footer(frame, layout.footer, FOOTER_KEYS, theme);

    if view.show_help {
        render_help(frame, theme);
    }
}
