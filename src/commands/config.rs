//! Config subcommands handler

use anyhow::{bail, Result};

use playbar::theme::Theme;
use playbar::Config;

/// Show current configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    println!("{}", config.to_toml()?);
    Ok(())
}

/// Print the config file path.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write a default config file.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn handle_init(force: bool) -> Result<()> {
    let theme = Theme::default();
    let path = Config::config_path()?;

    if path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let path = Config::default().save()?;
    println!(
        "{}",
        theme.primary_text(&format!("Wrote default config to {}", path.display()))
    );
    Ok(())
}
