//! Control surface state.
//!
//! Everything the renderer needs to draw the controls lives here as plain
//! data. The controller mutates it; the renderer only reads it.

use tracing::warn;

use crate::config::{ControlsConfig, SkipSpec, SliderConfig};
use crate::element::PlaybackElement;

/// Glyph shown on the toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleGlyph {
    /// Shown while paused
    Play,
    /// Shown while playing
    Pause,
}

impl ToggleGlyph {
    /// Glyph matching the element's paused state.
    pub fn for_paused(paused: bool) -> Self {
        if paused {
            ToggleGlyph::Play
        } else {
            ToggleGlyph::Pause
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ToggleGlyph::Play => "►",
            ToggleGlyph::Pause => "❚ ❚",
        }
    }
}

/// The play/pause button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleControl {
    pub glyph: ToggleGlyph,
    pub disabled: bool,
}

impl Default for ToggleControl {
    fn default() -> Self {
        Self {
            glyph: ToggleGlyph::Play,
            disabled: false,
        }
    }
}

/// The progress track and its filled portion.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressTrack {
    width: f64,
    fill_percent: f64,
}

impl ProgressTrack {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            fill_percent: 0.0,
        }
    }

    /// Measured width of the track, in the same unit as pointer offsets.
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Filled portion as a percentage of the track width.
    pub fn fill_percent(&self) -> f64 {
        self.fill_percent
    }

    /// Filled portion as a fraction of the track width.
    pub fn fill_fraction(&self) -> f64 {
        self.fill_percent / 100.0
    }

    pub(crate) fn set_fill_percent(&mut self, percent: f64) {
        self.fill_percent = percent;
    }
}

impl Default for ProgressTrack {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// A button that seeks by a fixed signed offset.
#[derive(Debug, Clone, PartialEq)]
pub struct SkipButton {
    /// Offset in seconds, negative skips backward
    pub offset: f64,
    pub disabled: bool,
}

impl SkipButton {
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            disabled: false,
        }
    }

    /// Button caption, e.g. `« 10s` or `25s »`.
    pub fn label(&self) -> String {
        let secs = self.offset.abs();
        let secs = if secs.fract() == 0.0 {
            format!("{}", secs as u64)
        } else {
            format!("{:.1}", secs)
        };
        if self.offset < 0.0 {
            format!("« {}s", secs)
        } else {
            format!("{}s »", secs)
        }
    }
}

/// Parse a skip tag, substituting `0` for malformed input.
pub fn parse_offset(tag: &str) -> f64 {
    tag.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Which element property a slider drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderKind {
    Volume,
    PlaybackRate,
}

impl SliderKind {
    /// Property name on the host element.
    pub fn name(self) -> &'static str {
        match self {
            SliderKind::Volume => "volume",
            SliderKind::PlaybackRate => "playbackRate",
        }
    }

    /// Setter on the element that this slider writes through.
    pub fn setter<E: PlaybackElement>(self) -> fn(&mut E, f64) {
        match self {
            SliderKind::Volume => E::set_volume,
            SliderKind::PlaybackRate => E::set_playback_rate,
        }
    }
}

/// Input range of a slider widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// A named range slider.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderControl {
    pub kind: SliderKind,
    pub value: f64,
    pub range: SliderRange,
    pub disabled: bool,
}

impl SliderControl {
    pub fn new(kind: SliderKind, value: f64, range: SliderRange) -> Self {
        Self {
            kind,
            value,
            range,
            disabled: false,
        }
    }

    /// Build a slider from its config entry.
    ///
    /// Reversed bounds are swapped. A non-finite bound or step leaves the
    /// widget unbounded or unstepped on that side.
    pub fn from_config(kind: SliderKind, config: &SliderConfig) -> Self {
        let (mut min, mut max) = (config.min, config.max);
        if min > max {
            warn!(slider = kind.name(), min, max, "slider bounds reversed, swapping");
            std::mem::swap(&mut min, &mut max);
        }
        Self::new(
            kind,
            config.value,
            SliderRange {
                min,
                max,
                step: config.step,
            },
        )
    }

    /// Keep `value` inside the widget range without ever panicking.
    fn bound(&self, value: f64) -> f64 {
        let SliderRange { min, max, .. } = self.range;
        let value = if min.is_finite() { value.max(min) } else { value };
        if max.is_finite() {
            value.min(max)
        } else {
            value
        }
    }

    /// Value the widget would hold after `steps` increments from the current one.
    ///
    /// The widget keeps its own value within `[min, max]`; that is the only
    /// bounding applied anywhere between the user and the element.
    pub fn stepped(&self, steps: i32) -> f64 {
        let step = if self.range.step.is_finite() {
            self.range.step
        } else {
            0.0
        };
        let next = self.value + step * steps as f64;
        // Round away accumulated float error from repeated steps
        let next = (next * 1000.0).round() / 1000.0;
        self.bound(next)
    }

    /// Value under a thumb position in `[0, 1]`, snapped to the step grid.
    pub fn value_at(&self, position: f64) -> f64 {
        let SliderRange { min, max, step } = self.range;
        if !(min.is_finite() && max.is_finite()) {
            return self.value;
        }
        let raw = min + position.clamp(0.0, 1.0) * (max - min);
        let snapped = if step > 0.0 && step.is_finite() {
            min + ((raw - min) / step).round() * step
        } else {
            raw
        };
        self.bound((snapped * 1000.0).round() / 1000.0)
    }

    /// Position of the thumb as a fraction of the widget range.
    pub fn position(&self) -> f64 {
        let span = self.range.max - self.range.min;
        if !span.is_finite() || span <= 0.0 {
            return 0.0;
        }
        ((self.value - self.range.min) / span).clamp(0.0, 1.0)
    }
}

/// The visible load-failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    pub message: String,
}

/// Every control the controller keeps in sync with the element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ControlSurface {
    pub toggle: ToggleControl,
    pub progress: ProgressTrack,
    pub skip_buttons: Vec<SkipButton>,
    pub sliders: Vec<SliderControl>,
    /// Present once a load failure has been surfaced
    pub banner: Option<ErrorBanner>,
}

impl ControlSurface {
    /// Build the surface described by the `[controls]` config section.
    pub fn from_config(config: &ControlsConfig) -> Self {
        Self {
            toggle: ToggleControl::default(),
            progress: ProgressTrack::default(),
            skip_buttons: config
                .skip
                .iter()
                .map(|spec| SkipButton::new(spec.offset()))
                .collect(),
            sliders: vec![
                SliderControl::from_config(SliderKind::Volume, &config.volume),
                SliderControl::from_config(SliderKind::PlaybackRate, &config.playback_rate),
            ],
            banner: None,
        }
    }

    pub fn load_failed(&self) -> bool {
        self.banner.is_some()
    }

    pub fn slider_index(&self, kind: SliderKind) -> Option<usize> {
        self.sliders.iter().position(|s| s.kind == kind)
    }

    /// True when every interactive control is disabled.
    pub fn all_disabled(&self) -> bool {
        self.toggle.disabled
            && self.skip_buttons.iter().all(|b| b.disabled)
            && self.sliders.iter().all(|s| s.disabled)
    }

    pub(crate) fn disable_all(&mut self) {
        self.toggle.disabled = true;
        for button in &mut self.skip_buttons {
            button.disabled = true;
        }
        for slider in &mut self.sliders {
            slider.disabled = true;
        }
    }
}

impl SkipSpec {
    /// Offset in seconds, `0` for malformed tags.
    pub fn offset(&self) -> f64 {
        match self {
            SkipSpec::Seconds(secs) if secs.is_finite() => *secs,
            SkipSpec::Seconds(_) => 0.0,
            SkipSpec::Tag(tag) => parse_offset(tag),
        }
    }
}
