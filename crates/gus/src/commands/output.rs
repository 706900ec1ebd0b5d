//! Text rendering of statuses

use gh_user_status_core::emoji::EmojiRenderer;
use gh_user_status_core::status::{Status, TeamMemberStatus};

const LIMITED_SUFFIX: &str = " (availability is limited)";

/// `<emoji> <message>` with shortcodes rendered, plus the limited marker
///
/// An emoji missing from the catalog is shown as the raw alias.
pub(crate) fn status_line(renderer: &EmojiRenderer<'_>, status: &Status) -> String {
    let emoji = renderer.glyph_or_raw(&status.emoji);
    let message = renderer.replace_all(&status.message);
    let mut line = match (emoji.is_empty(), message.is_empty()) {
        (true, _) => message,
        (false, true) => emoji.into_owned(),
        (false, false) => format!("{emoji} {message}"),
    };
    if status.limited {
        line.push_str(LIMITED_SUFFIX);
    }
    line
}

/// One `<login>: <status line>` per member, in roster order
pub(crate) fn team_lines(
    renderer: &EmojiRenderer<'_>,
    members: &[TeamMemberStatus],
) -> Vec<String> {
    members
        .iter()
        .map(|m| format!("{}: {}", m.login, status_line(renderer, &m.status)))
        .collect()
}
