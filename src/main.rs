//! playbar command line entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use playbar::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => commands::play::handle(args),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
        Commands::Completions { shell } => {
            commands::handle_completions(shell);
            Ok(())
        }
    }
}
