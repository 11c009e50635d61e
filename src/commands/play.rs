//! Play command handler

use anyhow::Result;

use playbar::cli::PlayArgs;
use playbar::logging::init_file_logging;
use playbar::player::{play_session, PlayOptions, PlaybackResult};
use playbar::theme::Theme;
use playbar::Config;

/// Open the source in the terminal player.
///
/// A load failure is shown inside the player; it is repeated on stderr after
/// the terminal is restored so it survives the alternate screen.
pub fn handle(args: PlayArgs) -> Result<()> {
    if let Some(path) = &args.log_file {
        init_file_logging(path)?;
    }

    let config = Config::load()?;
    let theme = Theme::by_name(&config.player.theme).unwrap_or_default();
    let options = PlayOptions {
        source: args.source,
        duration: args.duration,
        volume: args.volume,
        rate: args.rate,
    };

    match play_session(&config, options)? {
        PlaybackResult::Quit => {}
        PlaybackResult::Failed(message) => eprintln!("{}", theme.error_text(&message)),
    }
    Ok(())
}
