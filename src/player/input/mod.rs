//! Input handling for the player.
//!
//! Translates terminal events into [`UiAction`]s addressed to the controller.
//! Handlers never touch the element: they only read the control surface (to
//! know slider values and skip button offsets) and the layout (to hit-test
//! the mouse).

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use crossterm::event::Event;

use crate::controller::{ControlSurface, UiAction};
use crate::player::layout::ControlsLayout;
use crate::player::state::{InputResult, ViewState};

/// Handle any input event, dispatching to the appropriate handler.
///
/// Actions produced by the event are appended to `actions`.
pub fn handle_event(
    event: Event,
    view: &mut ViewState,
    surface: &ControlSurface,
    layout: &ControlsLayout,
    actions: &mut Vec<UiAction>,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, view, surface, actions),
        Event::Mouse(mouse) => {
            handle_mouse_event(mouse, surface, layout, actions);
            InputResult::Continue
        }
        Event::Resize(_, _) => {
            view.handle_resize();
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus and paste events
    }
}
