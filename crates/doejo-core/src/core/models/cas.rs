use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CasError {
    #[error(
        "Invalid CAS format for '{0}'. Expected 2-7 digits, 2 digits and a check digit separated by '-' (e.g., '64-17-5')."
    )]
    InvalidFormat(String),

    #[error("Checksum mismatch for CAS '{cas}': expected check digit {expected}, found {found}")]
    ChecksumMismatch {
        cas: String,
        expected: u32,
        found: u32,
    },
}

/// A CAS Registry Number whose format and check digit have been verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CasNumber(String);

impl CasNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Digits are weighted 1, 2, 3, ... from the right, excluding the check digit.
    fn check_digit(first: &str, second: &str) -> u32 {
        let weighted: u32 = first
            .chars()
            .chain(second.chars())
            .rev()
            .filter_map(|c| c.to_digit(10))
            .zip(1u32..)
            .map(|(digit, weight)| digit * weight)
            .sum();
        weighted % 10
    }
}

impl FromStr for CasNumber {
    type Err = CasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cas = s.trim();
        let invalid = || CasError::InvalidFormat(s.to_string());

        let mut parts = cas.split('-');
        let (Some(first), Some(second), Some(check), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !(2..=7).contains(&first.len())
            || second.len() != 2
            || check.len() != 1
            || !is_digits(first)
            || !is_digits(second)
            || !is_digits(check)
        {
            return Err(invalid());
        }

        let found = check
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or_else(invalid)?;
        let expected = Self::check_digit(first, second);
        if expected != found {
            return Err(CasError::ChecksumMismatch {
                cas: cas.to_string(),
                expected,
                found,
            });
        }

        Ok(Self(cas.to_string()))
    }
}

impl fmt::Display for CasNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_cas_numbers() {
        for cas in ["64-17-5", "7732-18-5", "50-00-0", "71-43-2"] {
            let parsed: CasNumber = cas.parse().unwrap();
            assert_eq!(parsed.as_str(), cas);
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let parsed: CasNumber = "  64-17-5\n".parse().unwrap();
        assert_eq!(parsed.to_string(), "64-17-5");
    }

    #[test]
    fn wrong_check_digit_is_rejected() {
        let err = "64-17-6".parse::<CasNumber>().unwrap_err();
        assert_eq!(
            err,
            CasError::ChecksumMismatch {
                cas: "64-17-6".to_string(),
                expected: 5,
                found: 6,
            }
        );
    }

    #[test]
    fn malformed_inputs_are_rejected() {
        for cas in [
            "", "64175", "6-17-5", "12345678-17-5", "64-1-5", "64-17-55", "6a-17-5", "64-17-5-1",
            "64--5",
        ] {
            assert!(
                matches!(cas.parse::<CasNumber>(), Err(CasError::InvalidFormat(_))),
                "expected '{}' to be rejected as malformed",
                cas
            );
        }
    }
}
