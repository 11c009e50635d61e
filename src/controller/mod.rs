//! Player controller
//!
//! Keeps the control surface and a [`PlaybackElement`] in sync in both
//! directions:
//!
//! - UI actions (button presses, slider edits, pointer input on the track)
//!   become requests on the element
//! - media events (`play`, `pause`, `timeupdate`, `loadedmetadata`, `error`)
//!   are reflected back into the [`ControlSurface`]
//!
//! # Architecture
//!
//! The controller never owns the element. Every operation borrows it for the
//! duration of the call, so the host stays free to drive the element's clock
//! between events. All operations are synchronous read-modify-writes; the
//! only state the controller keeps besides the surface is whether the pointer
//! is held down on the progress track.
//!
//! # Usage
//!
//! ```
//! use playbar::config::ControlsConfig;
//! use playbar::controller::{ControlSurface, PlayerController, UiAction};
//! use playbar::element::{PlaybackElement, SimulatedElement};
//!
//! let mut element = SimulatedElement::open("clip.mp4", Some(120.0));
//! let mut controller =
//!     PlayerController::new(ControlSurface::from_config(&ControlsConfig::default()));
//!
//! controller.handle_action(&mut element, UiAction::TogglePressed);
//! for event in element.drain_events() {
//!     controller.handle_media_event(&mut element, &event);
//! }
//! ```

mod controls;

pub use controls::{
    parse_offset, ControlSurface, ErrorBanner, ProgressTrack, SkipButton, SliderControl,
    SliderKind, SliderRange, ToggleControl, ToggleGlyph,
};

use tracing::{debug, info, warn};

use crate::element::{duration_is_known, duration_is_usable, MediaEvent, PlaybackElement};

/// Banner text used when none is configured.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Error: Unable to load video. Please check the file path.";

/// Pointer input on the progress track.
///
/// Offsets are measured from the left edge of the track, in the same unit
/// as [`ProgressTrack::width`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down,
    Up,
    Leave,
    Move { offset_x: f64 },
    Click { offset_x: f64 },
}

/// User input addressed to a control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiAction {
    /// The play/pause button was pressed
    TogglePressed,
    /// The media area itself was clicked
    ViewerClicked,
    /// Skip button at this index was pressed
    SkipPressed(usize),
    /// Slider at `index` reported a new value (`input` or `change`)
    SliderChanged { index: usize, value: f64 },
    /// Pointer activity on the progress track
    Pointer(PointerEvent),
}

/// Binds a [`ControlSurface`] to a playback element.
#[derive(Debug)]
pub struct PlayerController {
    surface: ControlSurface,
    pointer_down: bool,
    failure_message: String,
}

impl PlayerController {
    pub fn new(surface: ControlSurface) -> Self {
        Self {
            surface,
            pointer_down: false,
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Text of the banner shown by [`handle_load_failure`].
    ///
    /// [`handle_load_failure`]: PlayerController::handle_load_failure
    pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
        self.failure_message = message.into();
        self
    }

    pub fn surface(&self) -> &ControlSurface {
        &self.surface
    }

    /// Whether the pointer is currently held down on the progress track.
    pub fn pointer_down(&self) -> bool {
        self.pointer_down
    }

    /// Record the measured width of the progress track.
    pub fn set_track_width(&mut self, width: f64) {
        self.surface.progress.set_width(width);
    }

    // === Operations ===

    /// Request play when paused, pause otherwise.
    ///
    /// Fire-and-forget: the element reports the outcome through `play` /
    /// `pause` events, if at all.
    pub fn toggle_playback<E: PlaybackElement>(&mut self, element: &mut E) {
        if element.paused() {
            debug!("requesting play");
            element.play();
        } else {
            debug!("requesting pause");
            element.pause();
        }
    }

    /// Show the pause glyph while playing and the play glyph while paused.
    pub fn refresh_toggle_icon<E: PlaybackElement>(&mut self, element: &E) {
        self.surface.toggle.glyph = ToggleGlyph::for_paused(element.paused());
    }

    /// Write the slider's value into the element property it is named after.
    ///
    /// No validation happens here; whatever the element does with an
    /// out-of-range value is the final behavior.
    pub fn apply_slider_value<E: PlaybackElement>(&mut self, element: &mut E, index: usize) {
        let Some(slider) = self.surface.sliders.get(index) else {
            debug!(index, "no slider at index");
            return;
        };
        debug!(slider = slider.kind.name(), value = slider.value, "applying slider");
        (slider.kind.setter::<E>())(element, slider.value);
    }

    /// Seek relative to the current time.
    ///
    /// With a known duration the target is clamped to `[0, duration]`;
    /// otherwise only the lower bound applies.
    pub fn skip<E: PlaybackElement>(&mut self, element: &mut E, offset: f64) {
        let target = skip_target(element.current_time(), offset, element.duration());
        debug!(offset, target, "skip");
        element.set_current_time(target);
    }

    /// Update the track fill from the element's current time.
    ///
    /// No-op while the duration is zero or unknown.
    pub fn refresh_progress_display<E: PlaybackElement>(&mut self, element: &E) {
        let duration = element.duration();
        if !duration_is_usable(duration) {
            return;
        }
        let percent = element.current_time() / duration * 100.0;
        self.surface.progress.set_fill_percent(percent);
    }

    /// Seek to the time under the pointer.
    ///
    /// No-op while the duration is zero or unknown, or before the track has
    /// been measured. The offset is not clamped to the track.
    pub fn scrub_to<E: PlaybackElement>(&mut self, element: &mut E, pointer_offset_x: f64) {
        let duration = element.duration();
        let width = self.surface.progress.width();
        if !duration_is_usable(duration) || width <= 0.0 {
            return;
        }
        let target = pointer_offset_x / width * duration;
        debug!(pointer_offset_x, width, target, "scrub");
        element.set_current_time(target);
    }

    /// Surface a load failure: banner, pause, disable every control.
    ///
    /// Only the first call has any effect. There is no way back.
    pub fn handle_load_failure<E: PlaybackElement>(&mut self, element: &mut E) {
        if self.surface.banner.is_some() {
            return;
        }
        warn!(message = %self.failure_message, "playback load failure");
        self.surface.banner = Some(ErrorBanner {
            message: self.failure_message.clone(),
        });
        element.pause();
        self.surface.disable_all();
    }

    /// Push every slider's value into the element.
    pub fn prime_sliders_from_metadata<E: PlaybackElement>(&mut self, element: &mut E) {
        for index in 0..self.surface.sliders.len() {
            self.apply_slider_value(element, index);
        }
    }

    // === Dispatch ===

    /// React to an event emitted by the element.
    pub fn handle_media_event<E: PlaybackElement>(&mut self, element: &mut E, event: &MediaEvent) {
        match event {
            MediaEvent::Play | MediaEvent::Pause => self.refresh_toggle_icon(element),
            MediaEvent::TimeUpdate => self.refresh_progress_display(element),
            MediaEvent::LoadedMetadata => {
                info!(duration = element.duration(), "metadata loaded, priming sliders");
                self.prime_sliders_from_metadata(element);
            }
            MediaEvent::Error(err) => {
                warn!(error = %err, "media error");
                self.handle_load_failure(element);
            }
        }
    }

    /// React to user input.
    ///
    /// Input addressed to a disabled control is dropped, the same way a
    /// disabled native control never fires.
    pub fn handle_action<E: PlaybackElement>(&mut self, element: &mut E, action: UiAction) {
        match action {
            UiAction::TogglePressed => {
                if !self.surface.toggle.disabled {
                    self.toggle_playback(element);
                }
            }
            UiAction::ViewerClicked => self.toggle_playback(element),
            UiAction::SkipPressed(index) => {
                let offset = match self.surface.skip_buttons.get(index) {
                    Some(button) if !button.disabled => button.offset,
                    _ => return,
                };
                self.skip(element, offset);
            }
            UiAction::SliderChanged { index, value } => {
                match self.surface.sliders.get_mut(index) {
                    Some(slider) if !slider.disabled => slider.value = value,
                    _ => return,
                }
                self.apply_slider_value(element, index);
            }
            UiAction::Pointer(pointer) => self.handle_pointer(element, pointer),
        }
    }

    fn handle_pointer<E: PlaybackElement>(&mut self, element: &mut E, pointer: PointerEvent) {
        match pointer {
            PointerEvent::Down => self.pointer_down = true,
            PointerEvent::Up | PointerEvent::Leave => self.pointer_down = false,
            PointerEvent::Click { offset_x } => self.scrub_to(element, offset_x),
            PointerEvent::Move { offset_x } => {
                if self.pointer_down {
                    self.scrub_to(element, offset_x);
                }
            }
        }
    }
}

/// Target time for a relative seek.
pub fn skip_target(current_time: f64, offset: f64, duration: f64) -> f64 {
    let target = (current_time + offset).max(0.0);
    if duration_is_known(duration) {
        target.min(duration)
    } else {
        target
    }
}
