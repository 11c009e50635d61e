//! Playback element abstraction.
//!
//! The controller never owns the media it drives. Anything that exposes
//! transport state and emits media events can sit behind [`PlaybackElement`]:
//!
//! - `simulated`: a clock-driven element used by the terminal front end and tests
//!
//! # Events
//!
//! Elements report state changes through [`MediaEvent`]s. Requests such as
//! [`PlaybackElement::play`] are fire-and-forget: the element may defer or
//! reject them, and the only feedback is whatever events it emits later.

mod error;
mod simulated;

pub use error::MediaError;
pub use simulated::SimulatedElement;

/// Host-provided media playback element.
///
/// Durations and times are in seconds. An unknown duration is reported as
/// `f64::NAN`, never as an `Option`, so callers must guard with
/// [`duration_is_known`] or [`duration_is_usable`].
pub trait PlaybackElement {
    /// Current playback position.
    fn current_time(&self) -> f64;
    /// Request a seek. The element may clamp the value.
    fn set_current_time(&mut self, seconds: f64);
    /// Total duration, `NaN` while unknown.
    fn duration(&self) -> f64;
    /// Whether playback is paused.
    fn paused(&self) -> bool;
    /// Request playback start.
    fn play(&mut self);
    /// Request pause.
    fn pause(&mut self);
    fn volume(&self) -> f64;
    /// Write the volume. Out-of-range values are the element's problem.
    fn set_volume(&mut self, volume: f64);
    fn playback_rate(&self) -> f64;
    /// Write the playback rate. Out-of-range values are the element's problem.
    fn set_playback_rate(&mut self, rate: f64);
}

/// Events emitted by a [`PlaybackElement`].
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Playback started
    Play,
    /// Playback paused
    Pause,
    /// Current time changed
    TimeUpdate,
    /// Duration and dimensions are known
    LoadedMetadata,
    /// The source failed to load or play
    Error(MediaError),
}

impl MediaEvent {
    /// Event name as a host document would spell it.
    pub fn name(&self) -> &'static str {
        match self {
            MediaEvent::Play => "play",
            MediaEvent::Pause => "pause",
            MediaEvent::TimeUpdate => "timeupdate",
            MediaEvent::LoadedMetadata => "loadedmetadata",
            MediaEvent::Error(_) => "error",
        }
    }
}

/// True when the duration is a number (possibly zero or infinite).
pub fn duration_is_known(duration: f64) -> bool {
    !duration.is_nan()
}

/// True when the duration can be used as a divisor for progress and scrub math.
///
/// Zero and `NaN` are rejected. An infinite duration (live stream) is also
/// rejected: the fill fraction would always be zero and scrub targets infinite.
pub fn duration_is_usable(duration: f64) -> bool {
    duration.is_finite() && duration > 0.0
}
