//! Controller driven by a simulated element

use playbar::controller::{PointerEvent, SliderKind, ToggleGlyph, UiAction};
use playbar::element::{MediaError, SimulatedElement};
use playbar::PlaybackElement;

use crate::helpers::{default_controller, media_fixture, pump};

fn loaded(duration: Option<f64>) -> (tempfile::TempDir, SimulatedElement) {
    let (dir, path) = media_fixture("clip.mp4");
    let mut element = SimulatedElement::open(path, duration);
    element.load();
    (dir, element)
}

#[test]
fn metadata_primes_element_from_sliders() {
    let (_dir, mut element) = loaded(Some(120.0));
    let mut controller = default_controller();
    controller.handle_action(
        &mut element,
        UiAction::SliderChanged {
            index: 0,
            value: 0.4,
        },
    );
    element.set_volume(1.0);

    pump(&mut controller, &mut element);

    assert_eq!(element.volume(), 0.4);
    assert_eq!(element.playback_rate(), 1.0);
}

#[test]
fn toggle_round_trip_follows_element_events() {
    let (_dir, mut element) = loaded(Some(120.0));
    let mut controller = default_controller();
    pump(&mut controller, &mut element);

    controller.handle_action(&mut element, UiAction::TogglePressed);
    pump(&mut controller, &mut element);
    assert!(!element.paused());
    assert_eq!(controller.surface().toggle.glyph, ToggleGlyph::Pause);

    controller.handle_action(&mut element, UiAction::ViewerClicked);
    pump(&mut controller, &mut element);
    assert!(element.paused());
    assert_eq!(controller.surface().toggle.glyph, ToggleGlyph::Play);
}

#[test]
fn playing_to_the_end_fills_track_and_resets_glyph() {
    let (_dir, mut element) = loaded(Some(10.0));
    let mut controller = default_controller();
    pump(&mut controller, &mut element);
    controller.toggle_playback(&mut element);
    pump(&mut controller, &mut element);

    element.advance(30.0);
    pump(&mut controller, &mut element);

    assert_eq!(element.current_time(), 10.0);
    assert_eq!(controller.surface().progress.fill_percent(), 100.0);
    assert_eq!(controller.surface().toggle.glyph, ToggleGlyph::Play);
}

#[test]
fn skip_buttons_clamp_to_media_bounds() {
    let (_dir, mut element) = loaded(Some(30.0));
    let mut controller = default_controller();
    pump(&mut controller, &mut element);

    controller.handle_action(&mut element, UiAction::SkipPressed(0));
    assert_eq!(element.current_time(), 0.0);

    controller.handle_action(&mut element, UiAction::SkipPressed(1));
    controller.handle_action(&mut element, UiAction::SkipPressed(1));
    assert_eq!(element.current_time(), 30.0);

    controller.handle_action(&mut element, UiAction::SkipPressed(0));
    assert_eq!(element.current_time(), 20.0);
}

#[test]
fn skip_with_unknown_duration_only_clamps_at_zero() {
    let (_dir, mut element) = loaded(None);
    let mut controller = default_controller();
    pump(&mut controller, &mut element);

    controller.skip(&mut element, 500.0);

    assert_eq!(element.current_time(), 500.0);
}

#[test]
fn drag_scrubs_only_while_pointer_is_down() {
    let (_dir, mut element) = loaded(Some(200.0));
    let mut controller = default_controller();
    pump(&mut controller, &mut element);
    controller.set_track_width(100.0);

    controller.handle_action(
        &mut element,
        UiAction::Pointer(PointerEvent::Move { offset_x: 10.0 }),
    );
    assert_eq!(element.current_time(), 0.0);

    controller.handle_action(&mut element, UiAction::Pointer(PointerEvent::Down));
    controller.handle_action(
        &mut element,
        UiAction::Pointer(PointerEvent::Move { offset_x: 25.0 }),
    );
    assert_eq!(element.current_time(), 50.0);

    controller.handle_action(&mut element, UiAction::Pointer(PointerEvent::Leave));
    controller.handle_action(
        &mut element,
        UiAction::Pointer(PointerEvent::Move { offset_x: 75.0 }),
    );
    assert_eq!(element.current_time(), 50.0);
    assert!(!controller.pointer_down());
}

#[test]
fn click_scrubs_without_pointer_down() {
    let (_dir, mut element) = loaded(Some(60.0));
    let mut controller = default_controller();
    pump(&mut controller, &mut element);
    controller.set_track_width(120.0);

    controller.handle_action(
        &mut element,
        UiAction::Pointer(PointerEvent::Click { offset_x: 60.0 }),
    );

    assert_eq!(element.current_time(), 30.0);
}

#[test]
fn missing_source_disables_everything() {
    let mut element = SimulatedElement::open("/nonexistent/playbar/clip.mp4", Some(60.0));
    let mut controller = default_controller().with_failure_message("gone");
    element.load();

    pump(&mut controller, &mut element);

    let surface = controller.surface();
    assert_eq!(surface.banner.as_ref().unwrap().message, "gone");
    assert!(surface.all_disabled());
    assert!(element.paused());
    assert!(matches!(
        element.error(),
        Some(MediaError::SourceNotFound { .. })
    ));
}

#[test]
fn actions_on_disabled_controls_are_dropped() {
    let mut element = SimulatedElement::open("/nonexistent/playbar/clip.mp4", Some(60.0));
    let mut controller = default_controller();
    element.load();
    pump(&mut controller, &mut element);
    let volume_index = controller.surface().slider_index(SliderKind::Volume).unwrap();

    controller.handle_action(
        &mut element,
        UiAction::SliderChanged {
            index: volume_index,
            value: 0.2,
        },
    );
    controller.handle_action(&mut element, UiAction::SkipPressed(1));

    assert_eq!(element.volume(), 1.0);
    assert_eq!(element.current_time(), 0.0);
    assert_eq!(controller.surface().sliders[volume_index].value, 1.0);
}

#[test]
fn second_error_keeps_single_banner() {
    let (_dir, mut element) = loaded(Some(60.0));
    let mut controller = default_controller().with_failure_message("first");
    pump(&mut controller, &mut element);

    element.fail(MediaError::Network {
        message: "reset".to_string(),
    });
    element.fail(MediaError::Aborted);
    pump(&mut controller, &mut element);

    assert_eq!(controller.surface().banner.as_ref().unwrap().message, "first");
}
