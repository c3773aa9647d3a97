//! Display formatting for estimate values.

/// Formats a dollar amount with a `$` prefix and grouped thousands, no
/// decimal places.
///
/// Non-finite values are printed as-is behind the `$` (so an estimate built
/// from unparseable input shows up as `$NaN` rather than being masked).
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("${value}");
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let bytes = digits.as_bytes();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*b as char);
    }

    let sign = if rounded < 0.0 { "-$" } else { "$" };
    format!("{sign}{grouped}")
}

/// Formats an optional estimate, using "—" when none is available.
pub fn opt_currency_display(value: Option<f64>) -> String {
    value.map_or_else(|| "—".to_string(), format_currency)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(609_000.0), "$609,000");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(1_000.0), "$1,000");
    }

    #[test]
    fn small_values_have_no_separator() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.0), "$999");
    }

    #[test]
    fn rounds_to_whole_dollars() {
        assert_eq!(format_currency(507_500.4), "$507,500");
        assert_eq!(format_currency(507_500.5), "$507,501");
    }

    #[test]
    fn negative_values_carry_the_sign_outside() {
        assert_eq!(format_currency(-7_500.0), "-$7,500");
    }

    #[test]
    fn nan_is_shown_not_masked() {
        assert_eq!(format_currency(f64::NAN), "$NaN");
    }

    #[test]
    fn optional_display_uses_a_dash_for_none() {
        assert_eq!(opt_currency_display(None), "—");
        assert_eq!(opt_currency_display(Some(42_000.0)), "$42,000");
    }
}
