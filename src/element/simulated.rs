//! Clock-driven playback element.
//!
//! Models the transport state of a host media element without decoding
//! anything: time advances by `elapsed * playback_rate` while playing.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::{duration_is_known, MediaError, MediaEvent, PlaybackElement};

/// Lowest playback rate the element accepts.
pub const MIN_PLAYBACK_RATE: f64 = 0.0625;
/// Highest playback rate the element accepts.
pub const MAX_PLAYBACK_RATE: f64 = 16.0;

/// A [`PlaybackElement`] backed by a wall clock instead of a decoder.
///
/// Events are queued as they happen and handed out by [`drain_events`].
///
/// [`drain_events`]: SimulatedElement::drain_events
#[derive(Debug)]
pub struct SimulatedElement {
    source: PathBuf,
    /// Duration reported once metadata has loaded
    media_duration: Option<f64>,
    current_time: f64,
    duration: f64,
    paused: bool,
    volume: f64,
    playback_rate: f64,
    error: Option<MediaError>,
    events: VecDeque<MediaEvent>,
}

impl SimulatedElement {
    /// Create an element for `source`. Nothing is loaded until [`load`].
    ///
    /// `duration` of `None` models a source whose length is never known
    /// (the element keeps reporting `NaN` after metadata loads).
    ///
    /// [`load`]: SimulatedElement::load
    pub fn open(source: impl Into<PathBuf>, duration: Option<f64>) -> Self {
        Self {
            source: source.into(),
            media_duration: duration,
            current_time: 0.0,
            duration: f64::NAN,
            paused: true,
            volume: 1.0,
            playback_rate: 1.0,
            error: None,
            events: VecDeque::new(),
        }
    }

    /// Resolve the source and queue `loadedmetadata` or `error`.
    pub fn load(&mut self) {
        match probe_source(&self.source) {
            Ok(()) => {
                self.duration = self.media_duration.unwrap_or(f64::NAN);
                info!(
                    source = %self.source.display(),
                    duration = self.duration,
                    "media metadata loaded"
                );
                self.events.push_back(MediaEvent::LoadedMetadata);
            }
            Err(err) => self.fail(err),
        }
    }

    /// Put the element into the failed state and queue an `error` event.
    pub fn fail(&mut self, err: MediaError) {
        warn!(source = %self.source.display(), error = %err, "media failed");
        self.duration = f64::NAN;
        self.error = Some(err.clone());
        self.events.push_back(MediaEvent::Error(err));
    }

    /// Advance the clock by `elapsed` wall-clock seconds.
    pub fn advance(&mut self, elapsed: f64) {
        if self.paused || self.error.is_some() || elapsed <= 0.0 {
            return;
        }

        let before = self.current_time;
        let mut next = before + elapsed * self.playback_rate;
        let mut ended = false;
        if duration_is_known(self.duration) && next >= self.duration {
            next = self.duration;
            ended = true;
        }

        self.current_time = next;
        if next != before {
            self.events.push_back(MediaEvent::TimeUpdate);
        }
        if ended {
            debug!(time = next, "reached end of media");
            self.paused = true;
            self.events.push_back(MediaEvent::Pause);
        }
    }

    /// Take all queued events in emission order.
    pub fn drain_events(&mut self) -> Vec<MediaEvent> {
        self.events.drain(..).collect()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The load/playback error, if the element failed.
    pub fn error(&self) -> Option<&MediaError> {
        self.error.as_ref()
    }
}

impl PlaybackElement for SimulatedElement {
    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        if seconds.is_nan() {
            warn!("rejected seek to NaN");
            return;
        }
        let mut target = seconds.max(0.0);
        if duration_is_known(self.duration) {
            target = target.min(self.duration);
        }
        self.current_time = target;
        self.events.push_back(MediaEvent::TimeUpdate);
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn play(&mut self) {
        if let Some(err) = &self.error {
            warn!(error = %err, "play request rejected");
            return;
        }
        if !self.paused {
            return;
        }
        // Restart from the top when play is requested at the end
        if duration_is_known(self.duration) && self.current_time >= self.duration {
            self.current_time = 0.0;
        }
        self.paused = false;
        self.events.push_back(MediaEvent::Play);
    }

    fn pause(&mut self) {
        if self.paused {
            return;
        }
        self.paused = true;
        self.events.push_back(MediaEvent::Pause);
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        if !(0.0..=1.0).contains(&volume) {
            warn!(volume, "rejected volume outside [0, 1]");
            return;
        }
        self.volume = volume;
    }

    fn playback_rate(&self) -> f64 {
        self.playback_rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        if !(MIN_PLAYBACK_RATE..=MAX_PLAYBACK_RATE).contains(&rate) {
            warn!(rate, "rejected playback rate");
            return;
        }
        self.playback_rate = rate;
    }
}

fn probe_source(path: &Path) -> Result<(), MediaError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(MediaError::SourceNotSupported {
            path: path.to_path_buf(),
        }),
        Err(_) => Err(MediaError::SourceNotFound {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(duration: Option<f64>) -> SimulatedElement {
        // Cargo.toml is always present when tests run from the crate root
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let mut el = SimulatedElement::open(path, duration);
        el.load();
        el.drain_events();
        el
    }

    #[test]
    fn load_existing_source_emits_metadata() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let mut el = SimulatedElement::open(path, Some(30.0));
        assert!(el.duration().is_nan());

        el.load();

        assert_eq!(el.drain_events(), vec![MediaEvent::LoadedMetadata]);
        assert_eq!(el.duration(), 30.0);
    }

    #[test]
    fn load_missing_source_emits_error() {
        let mut el = SimulatedElement::open("/nonexistent/download.mp4", Some(30.0));
        el.load();

        let events = el.drain_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            MediaEvent::Error(MediaError::SourceNotFound { .. })
        ));
        assert!(el.duration().is_nan());
        assert!(el.error().is_some());
    }

    #[test]
    fn load_directory_is_not_supported() {
        let mut el = SimulatedElement::open(env!("CARGO_MANIFEST_DIR"), None);
        el.load();

        assert!(matches!(
            el.error(),
            Some(MediaError::SourceNotSupported { .. })
        ));
    }

    #[test]
    fn unknown_duration_stays_nan_after_load() {
        let el = loaded(None);
        assert!(el.duration().is_nan());
    }

    #[test]
    fn play_and_pause_emit_only_on_change() {
        let mut el = loaded(Some(10.0));

        el.play();
        el.play();
        el.pause();
        el.pause();

        assert_eq!(el.drain_events(), vec![MediaEvent::Play, MediaEvent::Pause]);
    }

    #[test]
    fn advance_scales_by_rate() {
        let mut el = loaded(Some(100.0));
        el.set_playback_rate(2.0);
        el.play();
        el.drain_events();

        el.advance(1.5);

        assert_eq!(el.current_time(), 3.0);
        assert_eq!(el.drain_events(), vec![MediaEvent::TimeUpdate]);
    }

    #[test]
    fn advance_while_paused_does_nothing() {
        let mut el = loaded(Some(100.0));
        el.advance(5.0);
        assert_eq!(el.current_time(), 0.0);
        assert!(el.drain_events().is_empty());
    }

    #[test]
    fn advance_stops_at_end_and_pauses() {
        let mut el = loaded(Some(10.0));
        el.set_current_time(9.0);
        el.play();
        el.drain_events();

        el.advance(5.0);

        assert_eq!(el.current_time(), 10.0);
        assert!(el.paused());
        assert_eq!(
            el.drain_events(),
            vec![MediaEvent::TimeUpdate, MediaEvent::Pause]
        );
    }

    #[test]
    fn advance_unbounded_when_duration_unknown() {
        let mut el = loaded(None);
        el.play();
        el.advance(1000.0);
        assert_eq!(el.current_time(), 1000.0);
        assert!(!el.paused());
    }

    #[test]
    fn play_at_end_restarts() {
        let mut el = loaded(Some(10.0));
        el.set_current_time(10.0);
        el.play();
        assert_eq!(el.current_time(), 0.0);
    }

    #[test]
    fn seek_is_clamped_by_element() {
        let mut el = loaded(Some(10.0));
        el.set_current_time(50.0);
        assert_eq!(el.current_time(), 10.0);
        el.set_current_time(-3.0);
        assert_eq!(el.current_time(), 0.0);
    }

    #[test]
    fn seek_emits_timeupdate() {
        let mut el = loaded(Some(10.0));
        el.set_current_time(4.0);
        assert_eq!(el.drain_events(), vec![MediaEvent::TimeUpdate]);
    }

    #[test]
    fn volume_out_of_range_is_rejected() {
        let mut el = loaded(Some(10.0));
        el.set_volume(0.5);
        el.set_volume(1.5);
        el.set_volume(-0.1);
        assert_eq!(el.volume(), 0.5);
    }

    #[test]
    fn playback_rate_bounds() {
        let mut el = loaded(Some(10.0));
        el.set_playback_rate(0.5);
        assert_eq!(el.playback_rate(), 0.5);
        el.set_playback_rate(0.0);
        el.set_playback_rate(32.0);
        el.set_playback_rate(f64::NAN);
        assert_eq!(el.playback_rate(), 0.5);
    }

    #[test]
    fn failed_element_rejects_play() {
        let mut el = SimulatedElement::open("/nonexistent/clip.webm", None);
        el.load();
        el.drain_events();

        el.play();

        assert!(el.paused());
        assert!(el.drain_events().is_empty());
    }
}
