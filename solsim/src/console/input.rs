//! Bounded integer input.

use std::fmt;
use std::ops::RangeInclusive;

/// Why an entry was refused. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    NotANumber(String),
    OutOfRange { value: i64, range: RangeInclusive<i64> },
    /// Input ended before an answer was given
    Eof,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotANumber(_) => f.write_str("Not an acceptable number"),
            InputError::OutOfRange { .. } => f.write_str("Number outside range"),
            InputError::Eof => f.write_str("No input"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse one trimmed line as an integer inside `range`.
pub fn parse_int(line: &str, range: RangeInclusive<i64>) -> Result<i64, InputError> {
    let trimmed = line.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(InputError::OutOfRange { value, range })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(parse_int("1", 1..=9), Ok(1));
        assert_eq!(parse_int(" 9 \n", 1..=9), Ok(9));
        assert!(matches!(parse_int("10", 1..=9), Err(InputError::OutOfRange { value: 10, .. })));
        assert!(matches!(parse_int("0", 1..=1000), Err(InputError::OutOfRange { .. })));
    }

    #[test]
    fn garbage_is_not_a_number() {
        let err = parse_int("three", 1..=9).unwrap_err();
        assert_eq!(err.to_string(), "Not an acceptable number");
        assert!(matches!(parse_int("", 1..=9), Err(InputError::NotANumber(_))));
    }
}
