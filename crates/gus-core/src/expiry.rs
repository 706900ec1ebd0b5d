//! Status expiry durations
//!
//! Accepts the interactive prompt choices (`Never`, `30m`, `1h`, `4h`, `24h`,
//! `7d`) and compound flag values such as `1h30m`. A zero duration means the
//! status never expires.

use std::time::Duration;
use thiserror::Error;

/// Choices offered by the interactive prompt, in display order
pub const EXPIRY_CHOICES: &[&str] = &["Never", "30m", "1h", "4h", "24h", "7d"];

/// Expiry parsing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpiryError {
    #[error("empty expiry duration")]
    Empty,

    #[error("invalid number in expiry duration '{input}'")]
    InvalidNumber { input: String },

    #[error("unknown unit '{unit}' in expiry duration '{input}'. Use s, m, h or d")]
    UnknownUnit { input: String, unit: String },
}

/// Parse an expiry duration
///
/// # Errors
///
/// Returns [`ExpiryError`] for empty input, a missing or oversized number, or a
/// unit other than `s`, `m`, `h`, `d`.
pub fn parse_expiry(text: &str) -> Result<Duration, ExpiryError> {
    let s = text.trim();
    if s.is_empty() {
        return Err(ExpiryError::Empty);
    }
    if s.eq_ignore_ascii_case("never") || s == "0" {
        return Ok(Duration::ZERO);
    }

    let invalid = || ExpiryError::InvalidNumber {
        input: s.to_string(),
    };

    let mut total = Duration::ZERO;
    let mut rest = s;
    while !rest.is_empty() {
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits == 0 {
            return Err(invalid());
        }
        let num: u64 = rest[..digits].parse().map_err(|_| invalid())?;
        rest = &rest[digits..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(rest.len());
        let unit = &rest[..unit_len];
        rest = &rest[unit_len..];

        let secs_per_unit = match unit.to_ascii_lowercase().as_str() {
            "s" => 1,
            "m" => 60,
            "h" => 60 * 60,
            "d" => 24 * 60 * 60,
            _ => {
                return Err(ExpiryError::UnknownUnit {
                    input: s.to_string(),
                    unit: unit.to_string(),
                });
            }
        };
        let secs = num.checked_mul(secs_per_unit).ok_or_else(invalid)?;
        total = total
            .checked_add(Duration::from_secs(secs))
            .ok_or_else(invalid)?;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: u64 = 60 * 60;

    #[test]
    fn prompt_choices_map_to_durations() {
        let expected = [0, 30 * 60, HOUR, 4 * HOUR, 24 * HOUR, 168 * HOUR];
        for (choice, secs) in EXPIRY_CHOICES.iter().zip(expected) {
            assert_eq!(parse_expiry(choice).unwrap(), Duration::from_secs(secs), "{choice}");
        }
    }

    #[test]
    fn never_and_zero_are_no_expiry() {
        assert_eq!(parse_expiry("never").unwrap(), Duration::ZERO);
        assert_eq!(parse_expiry("NEVER").unwrap(), Duration::ZERO);
        assert_eq!(parse_expiry("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_expiry("0s").unwrap(), Duration::ZERO);
    }

    #[test]
    fn compound_durations_add_up() {
        assert_eq!(parse_expiry("1h30m").unwrap(), Duration::from_secs(HOUR + 1800));
        assert_eq!(parse_expiry("1d2h").unwrap(), Duration::from_secs(26 * HOUR));
        assert_eq!(parse_expiry(" 90s ").unwrap(), Duration::from_secs(90));
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(parse_expiry("  "), Err(ExpiryError::Empty));
    }

    #[test]
    fn missing_unit_is_rejected() {
        let err = parse_expiry("30").unwrap_err();
        assert!(matches!(err, ExpiryError::UnknownUnit { ref unit, .. } if unit.is_empty()));
    }

    #[test]
    fn unknown_unit_is_rejected() {
        let err = parse_expiry("2w").unwrap_err();
        assert!(err.to_string().contains("unknown unit 'w'"), "{err}");
    }

    #[test]
    fn missing_number_is_rejected() {
        assert!(matches!(parse_expiry("h"), Err(ExpiryError::InvalidNumber { .. })));
        assert!(matches!(parse_expiry("1h-2m"), Err(ExpiryError::UnknownUnit { .. })));
    }

    #[test]
    fn overflow_is_rejected() {
        assert!(matches!(
            parse_expiry("99999999999999999999d"),
            Err(ExpiryError::InvalidNumber { .. })
        ));
    }
}
