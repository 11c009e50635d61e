//! Mouse input handling for the player.
//!
//! Terminal mouse reports are mapped onto the pointer model of the progress
//! track: button down sets the pointer gate, drags become moves, leaving the
//! track row clears the gate, and a release on the track is also a click.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::controller::{ControlSurface, PointerEvent, UiAction};
use crate::player::layout::{ControlsLayout, Hit};

/// Handle a mouse event.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    surface: &ControlSurface,
    layout: &ControlsLayout,
    actions: &mut Vec<UiAction>,
) {
    let hit = layout.hit(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match hit {
            Some(Hit::Track(_)) => actions.push(UiAction::Pointer(PointerEvent::Down)),
            Some(Hit::Toggle) => actions.push(UiAction::TogglePressed),
            Some(Hit::Skip(index)) => actions.push(UiAction::SkipPressed(index)),
            Some(Hit::Slider(index, pos)) => push_slider_at(surface, index, pos, actions),
            Some(Hit::Viewer) => actions.push(UiAction::ViewerClicked),
            None => {}
        },
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => match hit {
            Some(Hit::Track(offset_x)) => {
                actions.push(UiAction::Pointer(PointerEvent::Move { offset_x }))
            }
            Some(Hit::Slider(index, pos)) if matches!(mouse.kind, MouseEventKind::Drag(_)) => {
                push_slider_at(surface, index, pos, actions);
                actions.push(UiAction::Pointer(PointerEvent::Leave));
            }
            _ => actions.push(UiAction::Pointer(PointerEvent::Leave)),
        },
        MouseEventKind::Up(MouseButton::Left) => {
            actions.push(UiAction::Pointer(PointerEvent::Up));
            if let Some(Hit::Track(offset_x)) = hit {
                actions.push(UiAction::Pointer(PointerEvent::Click { offset_x }));
            }
        }
        _ => {}
    }
}

fn push_slider_at(surface: &ControlSurface, index: usize, pos: f64, actions: &mut Vec<UiAction>) {
    if let Some(slider) = surface.sliders.get(index) {
        actions.push(UiAction::SliderChanged {
            index,
            value: slider.value_at(pos),
        });
    }
}
