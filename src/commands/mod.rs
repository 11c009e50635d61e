//! Subcommand handlers

pub mod config;
pub mod play;

use std::io;

use clap::CommandFactory;
use clap_complete::Shell;

use playbar::cli::Cli;

/// Print completions for `shell` to stdout.
pub fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "playbar", &mut io::stdout());
}
