//! Turns raw answer text into typed values.
//!
//! Decimal answers accept either `.` or `,` as the decimal separator.
//! Fraction answers are written `numerator/denominator` with integer parts.

use crate::trainer::{models::MalformedReason, rational::Rational};

/// Separator between numerator and denominator in fraction answers.
pub const FRACTION_SEPARATOR: char = '/';

/// Parse a decimal or integer answer.  `"-15,0"` and `"-15.0"` are the same.
pub fn parse_decimal(raw: &str) -> Result<f64, MalformedReason> {
    let normalised = raw.trim().replace(',', ".");
    match normalised.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(MalformedReason::NotANumber),
    }
}

/// Parse one integer component of a fraction.
pub fn parse_integer(raw: &str) -> Result<i64, MalformedReason> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MalformedReason::ExpectedFraction);
    }
    trimmed.parse::<i64>().map_err(|_| MalformedReason::NotANumber)
}

/// Build a fraction from separately entered numerator and denominator text.
pub fn parse_fraction_parts(numer: &str, denom: &str) -> Result<Rational, MalformedReason> {
    let n = parse_integer(numer)?;
    let d = parse_integer(denom)?;
    Rational::new(n as i128, d as i128).map_err(|_| MalformedReason::ZeroDenominator)
}

/// Parse `"n/d"`; a missing separator, extra separators or an empty side is
/// `ExpectedFraction`, a non-integer side is `NotANumber`, `d == 0` is
/// `ZeroDenominator`.
pub fn parse_fraction(raw: &str) -> Result<Rational, MalformedReason> {
    let mut parts = raw.split(FRACTION_SEPARATOR);
    let (numer, denom) = match (parts.next(), parts.next(), parts.next()) {
        (Some(n), Some(d), None) => (n, d),
        _ => return Err(MalformedReason::ExpectedFraction),
    };
    parse_fraction_parts(numer, denom)
}
