//! Shared test fixtures

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use playbar::config::ControlsConfig;
use playbar::element::SimulatedElement;
use playbar::{ControlSurface, PlayerController};

/// Create an empty media file inside a fresh temp dir.
///
/// The dir must outlive the returned path.
pub fn media_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, b"").unwrap();
    (dir, path)
}

/// Controller built from the stock control defaults.
pub fn default_controller() -> PlayerController {
    PlayerController::new(ControlSurface::from_config(&ControlsConfig::default()))
}

/// Hand every queued element event to the controller.
pub fn pump(controller: &mut PlayerController, element: &mut SimulatedElement) {
    for event in element.drain_events() {
        controller.handle_media_event(element, &event);
    }
}
