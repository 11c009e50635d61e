//! Control row rendering: toggle, skip buttons and sliders.

use ratatui::{text::Span, widgets::Paragraph, Frame};

use super::PlayerView;
use crate::controller::{SliderControl, SliderKind};
use crate::player::layout::{slider_label, ControlsLayout, SLIDER_BAR_WIDTH};
use crate::theme::Theme;

/// Text of the toggle button, always five cells wide.
pub fn toggle_text(symbol: &str) -> String {
    format!("[{:^3}]", symbol)
}

/// Slider bar including its frame, e.g. `▕████░░░░░░▏`.
pub fn slider_bar(slider: &SliderControl, width: usize) -> String {
    let filled = (width as f64 * slider.position()).round() as usize;
    let filled = filled.min(width);
    let mut bar = String::with_capacity(width * 3 + 6);
    bar.push('▕');
    bar.extend(std::iter::repeat('█').take(filled));
    bar.extend(std::iter::repeat('░').take(width - filled));
    bar.push('▏');
    bar
}

/// Slider value as shown next to the bar.
pub fn slider_value_text(slider: &SliderControl) -> String {
    match slider.kind {
        SliderKind::Volume => format!(" {:>3.0}%", slider.value * 100.0),
        SliderKind::PlaybackRate => format!(" {:.2}x", slider.value),
    }
}

pub fn render_controls(frame: &mut Frame, layout: &ControlsLayout, view: &PlayerView, theme: &Theme) {
    let surface = view.surface;

    let toggle = Span::styled(
        toggle_text(surface.toggle.glyph.symbol()),
        theme.control_style(surface.toggle.disabled),
    );
    frame.render_widget(Paragraph::new(toggle), layout.toggle);

    for (button, rect) in surface.skip_buttons.iter().zip(&layout.skips) {
        let text = Span::styled(
            format!("[{}]", button.label()),
            theme.control_style(button.disabled),
        );
        frame.render_widget(Paragraph::new(text), *rect);
    }

    for (index, slider) in surface.sliders.iter().enumerate() {
        let style = theme.control_style(slider.disabled);
        if let Some(rect) = layout.slider_labels.get(index) {
            frame.render_widget(
                Paragraph::new(Span::styled(slider_label(slider.kind), style)),
                *rect,
            );
        }
        if let Some(rect) = layout.slider_bars.get(index) {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    slider_bar(slider, SLIDER_BAR_WIDTH as usize),
                    style,
                )),
                *rect,
            );
        }
        if let Some(rect) = layout.slider_values.get(index) {
            frame.render_widget(
                Paragraph::new(Span::styled(slider_value_text(slider), style)),
                *rect,
            );
        }
    }
}
