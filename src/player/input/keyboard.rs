//! Keyboard input handling for the player.
//!
//! Every shortcut stands in for a pointer press on one of the controls.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::controller::{ControlSurface, SliderKind, UiAction};
use crate::player::state::{InputResult, ViewState};

/// Handle a keyboard event.
pub fn handle_key_event(
    key: KeyEvent,
    view: &mut ViewState,
    surface: &ControlSurface,
    actions: &mut Vec<UiAction>,
) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    // If help is showing, any key closes it
    if view.show_help {
        view.show_help = false;
        view.needs_render = true;
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        KeyCode::Char('?') => {
            view.toggle_help();
            InputResult::Continue
        }

        // === Playback ===
        KeyCode::Char(' ') | KeyCode::Char('k') => {
            actions.push(UiAction::TogglePressed);
            InputResult::Continue
        }
        KeyCode::Enter => {
            actions.push(UiAction::ViewerClicked);
            InputResult::Continue
        }

        // === Skip buttons ===
        KeyCode::Left => {
            if let Some(index) = surface.skip_buttons.iter().position(|b| b.offset < 0.0) {
                actions.push(UiAction::SkipPressed(index));
            }
            InputResult::Continue
        }
        KeyCode::Right => {
            if let Some(index) = surface.skip_buttons.iter().position(|b| b.offset > 0.0) {
                actions.push(UiAction::SkipPressed(index));
            }
            InputResult::Continue
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            if index < surface.skip_buttons.len() {
                actions.push(UiAction::SkipPressed(index));
            }
            InputResult::Continue
        }

        // === Sliders ===
        KeyCode::Up => {
            push_slider_step(surface, SliderKind::Volume, 1, actions);
            InputResult::Continue
        }
        KeyCode::Down => {
            push_slider_step(surface, SliderKind::Volume, -1, actions);
            InputResult::Continue
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            push_slider_step(surface, SliderKind::PlaybackRate, 1, actions);
            InputResult::Continue
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            push_slider_step(surface, SliderKind::PlaybackRate, -1, actions);
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}

/// Queue a slider edit one step away from its current value.
fn push_slider_step(
    surface: &ControlSurface,
    kind: SliderKind,
    steps: i32,
    actions: &mut Vec<UiAction>,
) {
    if let Some(index) = surface.slider_index(kind) {
        let value = surface.sliders[index].stepped(steps);
        actions.push(UiAction::SliderChanged { index, value });
    }
}
