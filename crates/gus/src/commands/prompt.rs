//! Terminal prompts: the scope confirmation and the interactive `set` flow

use super::error::CommandError;
use anyhow::Result;
use gh_user_status_core::emoji::EmojiCatalog;
use gh_user_status_core::expiry::{EXPIRY_CHOICES, parse_expiry};
use gh_user_status_core::prompt::Confirm;
use std::io::{self, BufRead, IsTerminal, Write};
use std::time::Duration;

/// Confirmer backed by stdin, writing to stderr
///
/// When stdin is not a terminal nothing is read and every question is
/// answered no.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TerminalConfirm {
    interactive: bool,
}

impl TerminalConfirm {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }
}

impl Confirm for TerminalConfirm {
    fn notice(&self, message: &str) {
        eprintln!("{message}");
    }

    fn confirm(&self, question: &str, default: bool) -> io::Result<bool> {
        if !self.interactive {
            eprintln!("{question} {} (stdin is not a terminal; assuming no)", hint(default));
            return Ok(false);
        }
        let stdin = io::stdin();
        ask_yes_no(&mut stdin.lock(), &mut io::stderr(), question, default)
    }
}

fn hint(default: bool) -> &'static str {
    if default { "[Y/n]" } else { "[y/N]" }
}

/// `y`/`yes`/`n`/`no` in any case; empty input takes `default`
pub(crate) fn parse_yes_no(answer: &str, default: bool) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

fn read_answer<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn closed() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, CommandError::InputClosed)
}

/// Ask until the answer parses as yes or no
pub(crate) fn ask_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
    default: bool,
) -> io::Result<bool> {
    loop {
        write!(out, "{question} {} ", hint(default))?;
        out.flush()?;
        let answer = read_answer(input)?.ok_or_else(closed)?;
        match parse_yes_no(&answer, default) {
            Some(yes) => return Ok(yes),
            None => writeln!(out, "Please answer y or n.")?,
        }
    }
}

/// Answers gathered by [`ask_status`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusAnswers {
    pub message: String,
    pub emoji: String,
    pub limited: bool,
    pub expiry: Duration,
}

/// Interactive `set`: message, emoji, limited availability, expiry
///
/// Typing `?` at the emoji question lists the catalog with the default
/// marked; an entry can then be picked by number or by any of its aliases,
/// and the canonical alias is kept. Unknown aliases and unparsable expiries
/// are asked again.
pub(crate) fn ask_status<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    catalog: &EmojiCatalog,
    default_emoji: &str,
) -> Result<StatusAnswers> {
    let message = loop {
        write!(out, "Status message: ")?;
        out.flush()?;
        let answer = read_answer(input)?.ok_or(CommandError::InputClosed)?;
        if !answer.is_empty() {
            break answer;
        }
        writeln!(out, "A message is required.")?;
    };

    let default_pos = catalog.position(default_emoji);
    let emoji = loop {
        write!(out, "Emoji (? to list) [{default_emoji}]: ")?;
        out.flush()?;
        let answer = read_answer(input)?.ok_or(CommandError::InputClosed)?;
        let alias = answer.trim_matches(':');
        if alias == "?" {
            for (i, emoji) in catalog.iter().enumerate() {
                let marker = if Some(i) == default_pos { '*' } else { ' ' };
                writeln!(out, "{marker}{:>4}) {emoji}", i + 1)?;
            }
            continue;
        }
        if alias.is_empty() {
            break default_emoji.to_string();
        }
        let picked = match alias.parse::<usize>() {
            Ok(n) if n >= 1 => catalog.iter().nth(n - 1),
            _ => catalog.get(alias),
        };
        match picked {
            Some(emoji) => break emoji.name().to_string(),
            None => writeln!(out, "Unknown emoji ':{alias}:'. Type ? to list them.")?,
        }
    };

    let limited = ask_yes_no(input, out, "Limited availability?", false)?;

    writeln!(out, "Clear status after:")?;
    for (i, choice) in EXPIRY_CHOICES.iter().enumerate() {
        writeln!(out, "  {}) {choice}", i + 1)?;
    }
    let expiry = loop {
        write!(out, "Choice [{}]: ", EXPIRY_CHOICES[0])?;
        out.flush()?;
        let answer = read_answer(input)?.ok_or(CommandError::InputClosed)?;
        let choice = match answer.parse::<usize>() {
            Ok(n) if (1..=EXPIRY_CHOICES.len()).contains(&n) => EXPIRY_CHOICES[n - 1],
            _ if answer.is_empty() => EXPIRY_CHOICES[0],
            _ => answer.as_str(),
        };
        match parse_expiry(choice) {
            Ok(duration) => break duration,
            Err(e) => writeln!(out, "{e}")?,
        }
    };

    Ok(StatusAnswers {
        message,
        emoji,
        limited,
        expiry,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (Result<StatusAnswers>, String) {
        let catalog = EmojiCatalog::builtin();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = ask_status(&mut input, &mut out, &catalog, "thought_balloon");
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn yes_no_answers() {
        assert_eq!(parse_yes_no("", true), Some(true));
        assert_eq!(parse_yes_no("", false), Some(false));
        assert_eq!(parse_yes_no(" YES ", false), Some(true));
        assert_eq!(parse_yes_no("n", true), Some(false));
        assert_eq!(parse_yes_no("maybe", true), None);
    }

    #[test]
    fn ask_yes_no_repeats_until_understood() {
        let mut input = Cursor::new(b"what\ny\n".to_vec());
        let mut out = Vec::new();
        assert!(ask_yes_no(&mut input, &mut out, "Add it?", false).unwrap());
        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown.matches("Add it? [y/N]").count(), 2);
    }

    #[test]
    fn ask_yes_no_fails_on_eof() {
        let mut input = Cursor::new(Vec::new());
        let err = ask_yes_no(&mut input, &mut Vec::new(), "Add it?", true).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn defaults_apply_on_empty_answers() {
        let (answers, _) = run("out to lunch\n\n\n\n");
        assert_eq!(
            answers.unwrap(),
            StatusAnswers {
                message: "out to lunch".to_string(),
                emoji: "thought_balloon".to_string(),
                limited: false,
                expiry: Duration::ZERO,
            }
        );
    }

    #[test]
    fn full_answers() {
        let (answers, _) = run("shipping\n:rocket:\ny\n3\n");
        let answers = answers.unwrap();
        assert_eq!(answers.emoji, "rocket");
        assert!(answers.limited);
        assert_eq!(answers.expiry, Duration::from_secs(60 * 60));
    }

    #[test]
    fn question_mark_lists_catalog_then_reasks() {
        let (answers, shown) = run("hi\n?\nwave\nn\n1h30m\n");
        assert_eq!(answers.unwrap().expiry, Duration::from_secs(90 * 60));
        assert!(shown.contains("👋 wave waving hand"));
        assert_eq!(shown.matches("Emoji (? to list)").count(), 2);
    }

    #[test]
    fn listing_marks_the_default() {
        let catalog = EmojiCatalog::builtin();
        let pos = catalog.position("thought_balloon").unwrap();
        let (_, shown) = run("hi\n?\n\n\n\n");
        let marked: Vec<_> = shown.lines().filter(|l| l.starts_with('*')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains(&format!("{}) 💭 thought_balloon", pos + 1)));
    }

    #[test]
    fn emoji_picked_by_number_or_alias_keeps_canonical_name() {
        let catalog = EmojiCatalog::builtin();
        let rocket = catalog.position("rocket").unwrap() + 1;
        let (answers, _) = run(&format!("go\n{rocket}\n\n\n"));
        assert_eq!(answers.unwrap().emoji, "rocket");

        let (answers, _) = run("ok\nthumbsup\n\n\n");
        assert_eq!(answers.unwrap().emoji, "+1");

        let (answers, shown) = run("ok\n0\n99999\nwave\n\n\n");
        assert_eq!(answers.unwrap().emoji, "wave");
        assert_eq!(shown.matches("Unknown emoji").count(), 2);
    }

    #[test]
    fn unknown_emoji_and_bad_expiry_are_reasked() {
        let (answers, shown) = run("\nhi\nnot_an_emoji\nzzz\n\nsoon\n7d\n");
        let answers = answers.unwrap();
        assert_eq!(answers.emoji, "zzz");
        assert_eq!(answers.expiry, Duration::from_secs(7 * 24 * 60 * 60));
        assert!(shown.contains("A message is required."));
        assert!(shown.contains("Unknown emoji ':not_an_emoji:'"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let (answers, _) = run("hi\n");
        assert!(answers.unwrap_err().to_string().contains("input closed"));
    }
}
