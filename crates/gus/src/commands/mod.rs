//! CLI command dispatch and execution

use anyhow::Result;
use clap::{Parser, Subcommand};
use gh_user_status_core::config::{Config, ConfigOverrides, resolve_config};
use gh_user_status_core::emoji::EmojiCatalog;
use gh_user_status_core::gh::GhCli;
use gh_user_status_core::home::get_home_dir;
use gh_user_status_core::status::StatusClient;

mod clear;
mod error;
mod get;
mod output;
mod prompt;
mod set;

/// gh-user-status - GitHub user status from the terminal
#[derive(Parser, Debug)]
#[command(
    name = "gh-user-status",
    version,
    about = "Read, set and clear GitHub user statuses",
    long_about = "A gh extension that reads and writes GitHub user statuses through `gh api graphql`"
)]
pub struct Cli {
    /// gh executable to run (default: `gh` on PATH)
    #[arg(long, global = true, value_name = "PATH")]
    gh: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Set your status
    Set(set::SetArgs),

    /// Clear your status
    Clear(clear::ClearArgs),

    /// Show the status of a user or of every member of a team
    Get(get::GetArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let ctx = Context::resolve(ConfigOverrides {
            gh_path: self.gh,
            ..Default::default()
        })?;

        match self.command {
            Commands::Set(args) => set::execute(args, &ctx),
            Commands::Clear(args) => clear::execute(args, &ctx),
            Commands::Get(args) => get::execute(args, &ctx),
        }
    }
}

/// Resolved configuration and the pieces every command builds on
#[derive(Debug)]
pub(crate) struct Context {
    pub config: Config,
    pub catalog: EmojiCatalog,
    gh: GhCli,
}

impl Context {
    fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        let home_dir = get_home_dir()?;
        let config = resolve_config(&overrides, &home_dir);
        let gh = match config.core.gh_path.as_deref() {
            Some(path) => GhCli::with_program(path),
            None => GhCli::new(),
        };

        Ok(Self {
            config,
            catalog: EmojiCatalog::builtin(),
            gh,
        })
    }

    pub fn client(&self) -> StatusClient<'_, &GhCli> {
        StatusClient::new(&self.gh, &self.catalog)
    }
}
