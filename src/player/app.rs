//! Player application state.
//!
//! Ties the element, the controller and the terminal view together without
//! touching a real terminal, so the whole event flow can be driven from tests.

use crossterm::event::Event;
use ratatui::Frame;
use tracing::debug;

use crate::config::ControlsConfig;
use crate::controller::{ControlSurface, PlayerController, UiAction};
use crate::element::{PlaybackElement, SimulatedElement};
use crate::player::input::handle_event;
use crate::player::layout::ControlsLayout;
use crate::player::render::{self, PlayerView};
use crate::player::state::{InputResult, ViewState};
use crate::theme::Theme;

/// One playback session: element, controller and view.
#[derive(Debug)]
pub struct PlayerApp {
    pub element: SimulatedElement,
    pub controller: PlayerController,
    pub view: ViewState,
    pub layout: ControlsLayout,
    theme: Theme,
    source_name: String,
}

impl PlayerApp {
    pub fn new(element: SimulatedElement, controls: &ControlsConfig, theme: Theme) -> Self {
        let source_name = display_name(&element);
        let controller = PlayerController::new(ControlSurface::from_config(controls))
            .with_failure_message(controls.failure_message(&source_name));
        Self {
            element,
            controller,
            view: ViewState::new(),
            layout: ControlsLayout::default(),
            theme,
            source_name,
        }
    }

    /// Ask the element to load its source and react to the outcome.
    pub fn start(&mut self) {
        self.element.load();
        self.pump_media_events();
    }

    /// Feed every queued element event to the controller.
    ///
    /// Returns the number of events handled.
    pub fn pump_media_events(&mut self) -> usize {
        let events = self.element.drain_events();
        for event in &events {
            debug!(event = event.name(), "media event");
            self.controller
                .handle_media_event(&mut self.element, event);
        }
        if !events.is_empty() {
            self.view.needs_render = true;
        }
        events.len()
    }

    /// Handle one terminal event.
    pub fn handle_input(&mut self, event: Event) -> InputResult {
        let mut actions = Vec::new();
        let result = handle_event(
            event,
            &mut self.view,
            self.controller.surface(),
            &self.layout,
            &mut actions,
        );
        for action in actions {
            self.dispatch(action);
        }
        self.pump_media_events();
        result
    }

    /// Apply a UI action directly.
    pub fn dispatch(&mut self, action: UiAction) {
        debug!(?action, "ui action");
        self.controller.handle_action(&mut self.element, action);
        self.view.needs_render = true;
    }

    /// Advance the element clock and process what it emitted.
    pub fn advance(&mut self, elapsed: f64) {
        self.element.advance(elapsed);
        self.pump_media_events();
    }

    /// Lay out and draw a frame, then record the measured track width.
    pub fn draw(&mut self, frame: &mut Frame) {
        self.layout = ControlsLayout::compute(frame.area(), self.controller.surface());
        let view = PlayerView {
            surface: self.controller.surface(),
            source: &self.source_name,
            current_time: self.element.current_time(),
            duration: self.element.duration(),
            paused: self.element.paused(),
            volume: self.element.volume(),
            playback_rate: self.element.playback_rate(),
            show_help: self.view.show_help,
        };
        render::draw(frame, &self.layout, &view, &self.theme);
        self.controller
            .set_track_width(f64::from(self.layout.track.width));
        self.view.needs_render = false;
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }
}

/// File name of the source, or the full path when it has none.
fn display_name(element: &SimulatedElement) -> String {
    let source = element.source();
    source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.display().to_string())
}
