//! Set command implementation

use anyhow::Result;
use clap::Args;
use gh_user_status_core::expiry::parse_expiry;
use gh_user_status_core::status::{SetOutcome, SetRequest};
use std::io::{self, IsTerminal};
use tracing::warn;

use super::Context;
use super::error::CommandError;
use super::output::status_line;
use super::prompt::{TerminalConfirm, ask_status};

/// Set your status
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Status message (omit, or pass an empty one, to be prompted for every field)
    message: Option<String>,

    /// Emoji alias, e.g. `rocket` (default: config `default_emoji`)
    #[arg(short, long)]
    emoji: Option<String>,

    /// Mark yourself as having limited availability
    #[arg(short, long)]
    limited: bool,

    /// Clear the status after this long, e.g. `30m`, `1h30m`, `7d` or `Never`
    #[arg(short = 'E', long, default_value = "Never", value_parser = parse_expiry)]
    expiry: std::time::Duration,

    /// Limit visibility to members of this organization (not yet supported)
    #[arg(short, long)]
    org: Option<String>,
}

/// Execute the set command
pub fn execute(args: SetArgs, ctx: &Context) -> Result<()> {
    let mut request = match args.message.filter(|m| !m.trim().is_empty()) {
        Some(message) => {
            let emoji = args
                .emoji
                .unwrap_or_else(|| ctx.config.core.default_emoji.clone());
            SetRequest::new(message, emoji)
                .limited(args.limited)
                .expiry(args.expiry)
        }
        None => {
            if !io::stdin().is_terminal() {
                return Err(CommandError::MessageRequired.into());
            }
            let default_emoji = args
                .emoji
                .unwrap_or_else(|| ctx.config.core.default_emoji.clone());
            let answers = ask_status(
                &mut io::stdin().lock(),
                &mut io::stderr(),
                &ctx.catalog,
                &default_emoji,
            )?;
            SetRequest::new(answers.message, answers.emoji)
                .limited(answers.limited)
                .expiry(answers.expiry)
        }
    };

    if let Some(org) = args.org {
        warn!("--org is not supported yet; the status will be visible to everyone");
        request.org = Some(org);
    }

    let client = ctx.client();
    match client.set_status(&request, &TerminalConfirm::new())? {
        SetOutcome::Applied(status) => {
            println!("✓ Status set to {}", status_line(&client.renderer(), &status));
        }
        SetOutcome::Declined => {}
    }

    Ok(())
}
