//! gh-user-status - read, set and clear GitHub user statuses
//!
//! A gh extension that drives `gh api graphql` for the user status
//! mutation and queries, rendering emoji shortcodes for the terminal.

use clap::Parser;

mod commands;

use commands::Cli;

fn main() {
    gh_user_status_core::logging::init();

    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
