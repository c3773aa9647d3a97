//! Common utility functions for valuation calculations.
//!
//! This module provides shared functionality used by the valuation
//! calculator, primarily the lenient numeric parsing applied to form input.

use std::sync::LazyLock;

use regex::Regex;

/// Longest leading run of a string that forms a decimal number: optional
/// sign, digits with at most one decimal point, optional exponent.
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
        .unwrap_or_else(|e| panic!("numeric prefix pattern failed to compile: {e}"))
});

/// Parses the leading numeric prefix of a string.
///
/// Leading whitespace is skipped, then as much of the string as forms a valid
/// decimal number is parsed and the rest ignored. This is how the enumerated
/// option labels behave: `"5+"` is 5, `"3+"` is 3. A string with no numeric
/// prefix (including the empty string) yields NaN, which then propagates
/// through the arithmetic rather than being rejected up front.
///
/// # Examples
///
/// ```
/// use valuation_core::calculations::common::parse_number_prefix;
///
/// assert_eq!(parse_number_prefix("2000"), 2000.0);
/// assert_eq!(parse_number_prefix("5+"), 5.0);
/// assert_eq!(parse_number_prefix("1.5"), 1.5);
/// assert!(parse_number_prefix("four").is_nan());
/// assert!(parse_number_prefix("").is_nan());
/// ```
pub fn parse_number_prefix(s: &str) -> f64 {
    let trimmed = s.trim_start();
    match NUMERIC_PREFIX.find(trimmed) {
        Some(m) => m.as_str().parse().unwrap_or(f64::NAN),
        None => f64::NAN,
    }
}

/// Returns the larger of two values by comparison.
///
/// Unlike [`f64::max`], a NaN on the right-hand side wins the comparison and
/// is returned. The age clamp relies on this so that an unparseable
/// construction year still surfaces as NaN instead of being silently
/// clamped to zero.
pub fn max(
    a: f64,
    b: f64,
) -> f64 {
    if a > b { a } else { b }
}
