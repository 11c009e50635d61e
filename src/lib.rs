//! Playbar - custom transport controls for a media playback element
//!
//! The core is [`controller::PlayerController`], which keeps a set of UI
//! controls (toggle button, progress track, skip buttons, volume and rate
//! sliders) in sync with any [`element::PlaybackElement`]. The terminal
//! front end in [`player`] drives it against a [`element::SimulatedElement`].

pub mod cli;
pub mod config;
pub mod controller;
pub mod element;
pub mod logging;
pub mod player;
pub mod theme;

pub use config::Config;
pub use controller::{ControlSurface, PlayerController};
pub use element::{MediaEvent, PlaybackElement};
