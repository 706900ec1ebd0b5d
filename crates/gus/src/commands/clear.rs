//! Clear command implementation

use anyhow::Result;
use clap::Args;
use gh_user_status_core::status::SetOutcome;

use super::Context;
use super::prompt::TerminalConfirm;

/// Clear your status
#[derive(Args, Debug)]
pub struct ClearArgs {}

/// Execute the clear command
pub fn execute(_args: ClearArgs, ctx: &Context) -> Result<()> {
    if let SetOutcome::Applied(_) = ctx.client().clear_status(&TerminalConfirm::new())? {
        println!("✓ Status cleared");
    }
    Ok(())
}
