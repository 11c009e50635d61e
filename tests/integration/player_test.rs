//! Terminal player driven through synthetic terminal events

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use playbar::config::ControlsConfig;
use playbar::controller::ToggleGlyph;
use playbar::element::SimulatedElement;
use playbar::player::{InputResult, PlayerApp};
use playbar::theme::Theme;
use playbar::PlaybackElement;

use crate::helpers::media_fixture;

const TRACK_ROW: u16 = 21;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// App on a 143x24 screen; its 128 cell track maps one cell to one second,
/// clicks landing on the cell centre.
fn drawn_app(path: &std::path::Path) -> (PlayerApp, Terminal<TestBackend>) {
    let element = SimulatedElement::open(path, Some(128.0));
    let mut app = PlayerApp::new(element, &ControlsConfig::default(), Theme::default());
    app.start();
    let mut terminal = Terminal::new(TestBackend::new(143, 24)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();
    (app, terminal)
}

#[test]
fn keyboard_controls_playback() {
    let (_dir, path) = media_fixture("clip.mp4");
    let (mut app, _terminal) = drawn_app(&path);

    app.handle_input(key(KeyCode::Char(' ')));
    assert_eq!(app.controller.surface().toggle.glyph, ToggleGlyph::Pause);

    app.handle_input(key(KeyCode::Right));
    assert_eq!(app.element.current_time(), 25.0);

    app.handle_input(key(KeyCode::Left));
    assert_eq!(app.element.current_time(), 15.0);

    assert_eq!(app.handle_input(key(KeyCode::Char('q'))), InputResult::Quit);
}

#[test]
fn click_on_track_seeks() {
    let (_dir, path) = media_fixture("clip.mp4");
    let (mut app, _terminal) = drawn_app(&path);
    let column = app.layout.track.x + 40;

    app.handle_input(mouse(MouseEventKind::Down(MouseButton::Left), column, TRACK_ROW));
    app.handle_input(mouse(MouseEventKind::Up(MouseButton::Left), column, TRACK_ROW));

    assert_eq!(app.element.current_time(), 40.5);
    assert!(!app.controller.pointer_down());
}

#[test]
fn drag_along_track_scrubs() {
    let (_dir, path) = media_fixture("clip.mp4");
    let (mut app, _terminal) = drawn_app(&path);
    let x = app.layout.track.x;

    app.handle_input(mouse(MouseEventKind::Down(MouseButton::Left), x + 5, TRACK_ROW));
    app.handle_input(mouse(MouseEventKind::Drag(MouseButton::Left), x + 30, TRACK_ROW));
    assert_eq!(app.element.current_time(), 30.5);

    app.handle_input(mouse(MouseEventKind::Drag(MouseButton::Left), x + 30, 2));
    assert!(!app.controller.pointer_down());

    app.handle_input(mouse(MouseEventKind::Moved, x + 60, TRACK_ROW));
    assert_eq!(app.element.current_time(), 30.5);
}

#[test]
fn click_on_last_track_cell_lands_near_the_end() {
    let (_dir, path) = media_fixture("clip.mp4");
    let (mut app, _terminal) = drawn_app(&path);
    let last = app.layout.track.x + app.layout.track.width - 1;

    app.handle_input(mouse(MouseEventKind::Up(MouseButton::Left), last, TRACK_ROW));

    assert_eq!(app.element.current_time(), 127.5);
}

#[test]
fn failed_source_renders_banner() {
    let (dir, _path) = media_fixture("clip.mp4");
    let missing = dir.path().join("download.mp4");
    let (mut app, mut terminal) = drawn_app(&missing);

    terminal.draw(|frame| app.draw(frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let banner_row: String = (0..buffer.area.width)
        .map(|x| buffer[(x, 20u16)].symbol().to_string())
        .collect();
    assert!(banner_row.contains("Unable to load video (download.mp4)"));
    assert!(app.controller.surface().all_disabled());

    app.handle_input(key(KeyCode::Char(' ')));
    assert!(app.element.paused());
}
