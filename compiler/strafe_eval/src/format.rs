//! Significant-digit number formatting.
//!
//! Output follows the C `%g` conversion that stream output uses by default:
//! at most `precision` significant digits, fixed notation unless the
//! decimal exponent is below -4 or at least `precision`, and trailing zeros
//! removed.

/// Format `value` with at most `precision` significant digits.
///
/// A precision of zero is treated as one.
///
/// ```
/// use strafe_eval::format_significant;
///
/// assert_eq!(format_significant(0.6269062757949784, 7), "0.6269063");
/// assert_eq!(format_significant(12.0, 7), "12");
/// assert_eq!(format_significant(0.000012345, 3), "1.23e-05");
/// ```
pub fn format_significant(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_owned();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_owned();
    }

    // The exponent must be taken after rounding: 9.9999999 rounds to 1e1.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let limit = i32::try_from(precision).unwrap_or(i32::MAX);

    if exponent < -4 || exponent >= limit {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = usize::try_from(limit - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
