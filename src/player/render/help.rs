//! Help overlay rendering.
//!
//! Displays a centered help box with all available shortcuts.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "",
    "  Playback",
    "    Space / k    Play / pause (toggle button)",
    "    Enter        Click the viewer",
    "    <- / ->      Skip back / forward",
    "    1-9          Press skip button N",
    "",
    "  Sliders",
    "    Up / Down    Volume",
    "    + / -        Playback rate",
    "",
    "  Mouse",
    "    Click/drag the progress track to scrub",
    "    Click buttons and slider bars",
    "",
    "  General",
    "    ?            Show this help",
    "    q / Esc      Quit",
    "",
    "  Press any key to close",
];

/// Width of the help box including borders.
pub const HELP_BOX_WIDTH: u16 = 48;

/// Area of the help box, centered in `area` and shrunk to fit.
pub fn help_area(area: Rect) -> Rect {
    let height = (HELP_LINES.len() as u16 + 2).min(area.height);
    let width = HELP_BOX_WIDTH.min(area.width);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render the help overlay.
pub fn render_help(frame: &mut Frame, theme: &Theme) {
    let area = help_area(frame.area());
    let lines: Vec<Line> = HELP_LINES.iter().map(|l| Line::from(*l)).collect();
    let help = Paragraph::new(lines).style(theme.text_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" playbar help ")
            .border_style(theme.accent_bold_style()),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}
