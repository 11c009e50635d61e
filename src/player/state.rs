//! Player view state
//!
//! Screen bookkeeping that lives outside the control surface.

/// What the main loop should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Exit the player
    Quit,
}

/// Terminal-side view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Whether the help overlay is visible
    pub show_help: bool,
    /// True when the screen needs to be redrawn
    pub needs_render: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            show_help: false,
            needs_render: true,
        }
    }

    /// The layout is recomputed from the frame on every draw, so a resize
    /// only needs a redraw.
    pub fn handle_resize(&mut self) {
        self.needs_render = true;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }
}
