//! Integration tests for playbar

mod helpers;

mod cli_test;
mod config_test;
mod controller_test;
mod player_test;
