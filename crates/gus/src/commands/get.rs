//! Get command implementation

use anyhow::Result;
use clap::Args;
use gh_user_status_core::config::OutputFormat;
use gh_user_status_core::gh::GhRunner;
use gh_user_status_core::status::{Lookup, StatusClient};

use super::Context;
use super::error::CommandError;
use super::output::{status_line, team_lines};

/// Show the status of a user or of every member of a team
#[derive(Args, Debug)]
pub struct GetArgs {
    /// User login, or `<org>/<team>` for a team (default: you)
    ///
    /// Everything after the first `/` is the team slug, so `github/a/b` asks
    /// for the team `a/b`. An empty org (`/team`) means the owner of the
    /// current repository.
    login: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Execute the get command
pub fn execute(args: GetArgs, ctx: &Context) -> Result<()> {
    let login = args.login.unwrap_or_default();
    let lookup = Lookup::parse(login.trim());
    let format = if args.json {
        OutputFormat::Json
    } else {
        ctx.config.display.format
    };

    let client = ctx.client();

    match lookup {
        Lookup::Team { org, slug } => {
            if slug.is_empty() {
                return Err(CommandError::InvalidTeam(login).into());
            }
            let members = client.get_team_statuses(&org, &slug)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&members)?),
                OutputFormat::Text => {
                    for line in team_lines(&client.renderer(), &members) {
                        println!("{line}");
                    }
                }
            }
        }
        Lookup::User(login) => print_user(&client, &login, format)?,
        Lookup::Viewer => print_user(&client, "", format)?,
    }

    Ok(())
}

fn print_user<R: GhRunner>(
    client: &StatusClient<'_, R>,
    login: &str,
    format: OutputFormat,
) -> Result<()> {
    let status = client.get_user_status(login)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&status)?),
        OutputFormat::Text => println!("{}", status_line(&client.renderer(), &status)),
    }
    Ok(())
}
