//! Status client: reads and writes statuses through a [`GhRunner`]

use super::decode::{decode_changed_status, decode_team_statuses, decode_user_status};
use super::error::StatusError;
use super::query::{
    auth_refresh_args, change_status_args, format_emoji, team_status_args, user_status_args,
};
use super::types::{SetOutcome, SetRequest, Status, TeamMemberStatus};
use crate::emoji::{EmojiCatalog, EmojiRenderer};
use crate::gh::{GhError, GhRunner};
use crate::prompt::Confirm;
use chrono::{DateTime, FixedOffset, Local};
use tracing::debug;

/// OAuth scope needed by `changeUserStatus`
pub const USER_SCOPE: &str = "user";

/// Text gh prints when the token lacks [`USER_SCOPE`]
pub const MISSING_USER_SCOPE_MARKER: &str = "one of the following scopes: ['user']";

/// Notice shown before offering to add the scope
pub const MISSING_SCOPE_NOTICE: &str = "! Sorry, this extension requires the 'user' scope.";

/// Question asked before running `gh auth refresh`
pub const ADD_SCOPE_QUESTION: &str = "Would you like to add the user scope now?";

fn local_now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// Reads and writes GitHub user statuses via `gh api graphql`
///
/// Every operation is synchronous: one `gh` process per round trip, plus an
/// interactive `gh auth refresh` and one retry when a write hits a missing
/// scope and the user agrees to fix it.
#[derive(Debug)]
pub struct StatusClient<'c, R> {
    runner: R,
    catalog: &'c EmojiCatalog,
    clock: fn() -> DateTime<FixedOffset>,
}

impl<'c, R: GhRunner> StatusClient<'c, R> {
    pub fn new(runner: R, catalog: &'c EmojiCatalog) -> Self {
        Self {
            runner,
            catalog,
            clock: local_now,
        }
    }

    /// Replace the clock used to compute absolute expiry timestamps
    pub fn with_clock(mut self, clock: fn() -> DateTime<FixedOffset>) -> Self {
        self.clock = clock;
        self
    }

    /// Renderer over the same catalog, for output text
    pub fn renderer(&self) -> EmojiRenderer<'c> {
        EmojiRenderer::new(self.catalog)
    }

    /// Status of `login`, or of the authenticated user when `login` is empty
    ///
    /// # Errors
    ///
    /// [`StatusError::Decode`] when the response lacks the
    /// `data.{viewer|user}.status` path, which is also what a user without a
    /// status looks like.
    pub fn get_user_status(&self, login: &str) -> Result<Status, StatusError> {
        let output = self.runner.run(&user_status_args(login))?;
        decode_user_status(&output.stdout, login)
    }

    /// Statuses of the members of `org/slug`
    ///
    /// An empty `org` lets gh substitute the current repository's owner. Only
    /// the first [`TEAM_PAGE_SIZE`](super::TEAM_PAGE_SIZE) members are
    /// returned; later pages are not fetched.
    pub fn get_team_statuses(
        &self,
        org: &str,
        slug: &str,
    ) -> Result<Vec<TeamMemberStatus>, StatusError> {
        let output = self.runner.run(&team_status_args(org, slug))?;
        decode_team_statuses(&output.stdout)
    }

    /// Set the authenticated user's status
    ///
    /// If gh reports the token lacks the `user` scope, `confirm` is asked
    /// whether to add it. Declining returns [`SetOutcome::Declined`]; agreeing
    /// runs `gh auth refresh -s user` and retries the mutation once.
    ///
    /// # Errors
    ///
    /// [`StatusError::Verification`] when the echoed emoji differs from the one
    /// sent, which is how the API reports an unknown emoji.
    pub fn set_status(
        &self,
        request: &SetRequest,
        confirm: &dyn Confirm,
    ) -> Result<SetOutcome, StatusError> {
        if let Some(org) = &request.org {
            debug!(org = %org, "org-scoped visibility is not supported; ignoring");
        }
        if !request.emoji.is_empty() && !self.catalog.contains(request.emoji.trim_matches(':')) {
            debug!(emoji = %request.emoji, "emoji not in local catalog; sending anyway");
        }

        let sent_emoji = format_emoji(&request.emoji);
        let args = change_status_args(request, (self.clock)())?;

        let output = match self.runner.run(&args) {
            Ok(output) => output,
            Err(err) if is_missing_scope(&err) => {
                debug!("changeUserStatus rejected for missing '{USER_SCOPE}' scope");
                confirm.notice(MISSING_SCOPE_NOTICE);
                let accepted = confirm
                    .confirm(ADD_SCOPE_QUESTION, true)
                    .map_err(StatusError::Prompt)?;
                if !accepted {
                    debug!("scope refresh declined");
                    return Ok(SetOutcome::Declined);
                }
                self.runner.run_interactive(&auth_refresh_args(USER_SCOPE))?;
                debug!("scope refreshed; retrying changeUserStatus once");
                self.runner.run(&args)?
            }
            Err(err) => return Err(err.into()),
        };

        let echoed = decode_changed_status(&output.stdout)?;
        if echoed.emoji != sent_emoji {
            return Err(StatusError::Verification {
                sent: sent_emoji,
                echoed: echoed.emoji,
            });
        }
        Ok(SetOutcome::Applied(echoed))
    }

    /// Clear the authenticated user's status
    ///
    /// Same scope handling as [`set_status`](Self::set_status).
    pub fn clear_status(&self, confirm: &dyn Confirm) -> Result<SetOutcome, StatusError> {
        self.set_status(&SetRequest::clear(), confirm)
    }
}

/// Whether a gh failure is the missing-`user`-scope rejection
pub fn is_missing_scope(err: &GhError) -> bool {
    match err.stderr() {
        Some(stderr) if stderr.contains(MISSING_USER_SCOPE_MARKER) => true,
        _ => err.to_string().contains(MISSING_USER_SCOPE_MARKER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(stderr: &str) -> GhError {
        GhError::ExecutionFailed {
            program: "gh".to_string(),
            status: "exit status: 1".to_string(),
            stderr: stderr.to_string(),
        }
    }

    #[test]
    fn detects_missing_scope_marker() {
        let err = failed(
            "GraphQL: Your token has not been granted the required scopes to execute this query. \
             The 'changeUserStatus' field requires one of the following scopes: ['user'], \
             but your token has only been granted the: ['repo'] scopes.",
        );
        assert!(is_missing_scope(&err));
    }

    #[test]
    fn other_failures_are_not_scope_errors() {
        assert!(!is_missing_scope(&failed("HTTP 502: Bad Gateway")));
        assert!(!is_missing_scope(&GhError::NotFound {
            program: "gh".to_string(),
            source: "missing".into(),
        }));
    }
}
