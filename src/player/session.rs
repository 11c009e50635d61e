//! Terminal session for the player.
//!
//! Owns the terminal for the lifetime of a playback session: raw mode,
//! alternate screen and mouse capture are enabled on entry and restored on
//! exit, including on error.

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use crate::config::Config;
use crate::element::SimulatedElement;
use crate::player::app::PlayerApp;
use crate::player::state::InputResult;
use crate::theme::Theme;

/// What to play and how to start.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayOptions {
    pub source: PathBuf,
    /// Known duration in seconds, `None` for an unknown length
    pub duration: Option<f64>,
    /// Initial volume slider value, overriding the config
    pub volume: Option<f64>,
    /// Initial rate slider value, overriding the config
    pub rate: Option<f64>,
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackResult {
    /// The user quit
    Quit,
    /// The user quit after the source failed to load
    Failed(String),
}

/// Play a source in the terminal until the user quits.
pub fn play_session(config: &Config, options: PlayOptions) -> Result<PlaybackResult> {
    let mut controls = config.controls.clone();
    if let Some(volume) = options.volume {
        controls.volume.value = volume;
    }
    if let Some(rate) = options.rate {
        controls.playback_rate.value = rate;
    }

    let theme = Theme::by_name(&config.player.theme).unwrap_or_else(|| {
        warn!(theme = %config.player.theme, "unknown theme, using default");
        Theme::default()
    });
    let tick = Duration::from_millis(config.player.tick_ms.max(10));

    let element = SimulatedElement::open(options.source.clone(), options.duration);
    let mut app = PlayerApp::new(element, &controls, theme);

    info!(source = %options.source.display(), "starting playback session");
    let mut terminal = TerminalGuard::enter()?;
    app.start();
    let result = run_loop(&mut terminal.terminal, &mut app, tick);
    drop(terminal);
    result?;

    Ok(match &app.controller.surface().banner {
        Some(banner) => PlaybackResult::Failed(banner.message.clone()),
        None => PlaybackResult::Quit,
    })
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut PlayerApp,
    tick: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        if app.view.needs_render {
            terminal.draw(|frame| app.draw(frame))?;
        }

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let event = event::read()?;
            if app.handle_input(event) == InputResult::Quit {
                info!("quit requested");
                return Ok(());
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            app.advance(elapsed.as_secs_f64());
            last_tick = Instant::now();
            // The clock display changes every tick even without events
            app.view.needs_render = true;
        }
    }
}

/// Restores the terminal when dropped.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))
            .context("Failed to create terminal")?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
