//! Terminal player front end
//!
//! Renders the control surface of a [`PlayerController`] in the terminal and
//! routes keyboard and mouse input into it, driving a [`SimulatedElement`].
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: ViewState struct and shared types (InputResult)
//! - `layout`: screen regions and mouse hit testing
//! - `input/`: Keyboard and mouse input handling
//! - `render/`: UI rendering (viewer, progress track, controls, banner, help)
//! - `app`: element + controller + view, terminal-free
//! - `session`: terminal setup and the main loop
//!
//! # Usage
//!
//! ```no_run
//! use playbar::config::Config;
//! use playbar::player::{play_session, PlayOptions, PlaybackResult};
//!
//! let options = PlayOptions {
//!     source: "clip.mp4".into(),
//!     duration: Some(120.0),
//!     volume: None,
//!     rate: None,
//! };
//! match play_session(&Config::default(), options).unwrap() {
//!     PlaybackResult::Quit => println!("Bye"),
//!     PlaybackResult::Failed(message) => eprintln!("{}", message),
//! }
//! ```
//!
//! [`PlayerController`]: crate::controller::PlayerController
//! [`SimulatedElement`]: crate::element::SimulatedElement

mod app;
pub(crate) mod input;
pub mod layout;
pub mod render;
mod session;
pub mod state;

pub use app::PlayerApp;
pub use session::{play_session, PlayOptions, PlaybackResult};
pub use state::{InputResult, ViewState};
