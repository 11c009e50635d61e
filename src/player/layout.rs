//! Screen layout and hit testing.
//!
//! The layout is recomputed on every draw from the frame area and the
//! control surface, then reused by the mouse handler to find which control
//! a click landed on.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::controller::{ControlSurface, SkipButton};

/// Width of the time display to the right of the track (` 00:00 / 00:00`).
pub const TIME_WIDTH: u16 = 14;
/// Width of a slider bar in cells.
pub const SLIDER_BAR_WIDTH: u16 = 10;
/// Width of the toggle button (`[ ► ]`).
pub const TOGGLE_WIDTH: u16 = 5;

/// What a pointer position lands on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    Viewer,
    Toggle,
    Skip(usize),
    /// Slider at index, with the position along its bar in `[0, 1]`
    Slider(usize, f64),
    /// Progress track, with the offset of the cell centre from its left edge
    Track(f64),
}

/// Rectangles for every region of the player screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlsLayout {
    pub viewer: Rect,
    pub banner: Rect,
    pub track: Rect,
    pub time: Rect,
    pub controls: Rect,
    pub footer: Rect,
    pub toggle: Rect,
    pub skips: Vec<Rect>,
    /// Label, bar and value for each slider
    pub slider_labels: Vec<Rect>,
    pub slider_bars: Vec<Rect>,
    pub slider_values: Vec<Rect>,
}

impl ControlsLayout {
    pub fn compute(area: Rect, surface: &ControlSurface) -> Self {
        let banner_height = if surface.load_failed() { 1 } else { 0 };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(banner_height),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let progress_row = rows[2];
        let track_width = progress_row.width.saturating_sub(TIME_WIDTH + 1);
        let track = Rect::new(progress_row.x + 1, progress_row.y, track_width, 1);
        let time = Rect::new(
            track.x + track.width,
            progress_row.y,
            progress_row.width.saturating_sub(track_width + 1),
            1,
        );

        let controls = rows[3];
        let mut cursor = Cursor::new(controls);
        let toggle = cursor.take(TOGGLE_WIDTH);
        cursor.gap();

        let skips = surface
            .skip_buttons
            .iter()
            .map(|button| {
                let rect = cursor.take(skip_width(button));
                cursor.gap();
                rect
            })
            .collect();

        let mut slider_labels = Vec::with_capacity(surface.sliders.len());
        let mut slider_bars = Vec::with_capacity(surface.sliders.len());
        let mut slider_values = Vec::with_capacity(surface.sliders.len());
        for slider in &surface.sliders {
            cursor.gap();
            slider_labels.push(cursor.take(slider_label(slider.kind).chars().count() as u16 + 1));
            slider_bars.push(cursor.take(SLIDER_BAR_WIDTH + 2));
            slider_values.push(cursor.take(6));
        }

        Self {
            viewer: rows[0],
            banner: rows[1],
            track,
            time,
            controls,
            footer: rows[4],
            toggle,
            skips,
            slider_labels,
            slider_bars,
            slider_values,
        }
    }

    /// Find the control under a terminal cell.
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        if contains(self.track, column, row) {
            // Centre of the cell, so the last cell lands next to the end
            return Some(Hit::Track(f64::from(column - self.track.x) + 0.5));
        }
        if contains(self.toggle, column, row) {
            return Some(Hit::Toggle);
        }
        if let Some(index) = self.skips.iter().position(|r| contains(*r, column, row)) {
            return Some(Hit::Skip(index));
        }
        if let Some(index) = self
            .slider_bars
            .iter()
            .position(|r| contains(*r, column, row))
        {
            let bar = self.slider_bars[index];
            // The bar is framed by one cell on each side
            let inner = f64::from(bar.width.saturating_sub(2).max(1));
            let pos = f64::from(column.saturating_sub(bar.x + 1)) / (inner - 1.0).max(1.0);
            return Some(Hit::Slider(index, pos.clamp(0.0, 1.0)));
        }
        if contains(self.viewer, column, row) {
            return Some(Hit::Viewer);
        }
        None
    }
}

/// Short slider caption.
pub fn slider_label(kind: crate::controller::SliderKind) -> &'static str {
    match kind {
        crate::controller::SliderKind::Volume => "vol",
        crate::controller::SliderKind::PlaybackRate => "rate",
    }
}

fn skip_width(button: &SkipButton) -> u16 {
    button.label().chars().count() as u16 + 2
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.width > 0
        && rect.height > 0
        && column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

/// Left-to-right allocator for the controls row.
struct Cursor {
    row: Rect,
    x: u16,
}

impl Cursor {
    fn new(row: Rect) -> Self {
        Self { row, x: row.x }
    }

    fn take(&mut self, width: u16) -> Rect {
        let end = self.row.x + self.row.width;
        let width = width.min(end.saturating_sub(self.x));
        let rect = Rect::new(self.x, self.row.y, width, self.row.height);
        self.x += width;
        rect
    }

    fn gap(&mut self) {
        self.take(1);
    }
}
