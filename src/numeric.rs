//! Numeric parsing, formatting and unit conversion.

use tracing::debug;

use crate::{CENTS_PER_DOLLAR, HelperError, INCHES_PER_YARD, MAX_EXACT_CENTS, PERCENT_SCALE, Result};

/// Parses a numeric string.
///
/// Accepts surrounding whitespace, an optional sign, digits with at most one
/// decimal point (`"5."` and `".5"` are fine) and an optional exponent.
/// Spellings such as `inf` or `NaN` and values that overflow are rejected.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(pos) => (&unsigned[..pos], Some(&unsigned[pos + 1..])),
        None => (unsigned, None),
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !all_digits(whole) || !all_digits(fraction) {
        return None;
    }
    if let Some(exponent) = exponent {
        let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if digits.is_empty() || !all_digits(digits) {
            return None;
        }
    }

    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `value` is numeric and has a non-zero fractional part.
pub fn is_decimal(value: &str) -> bool {
    parse_numeric(value).is_some_and(|v| v.floor() != v)
}

/// Renders a numeric string in its shortest form (`"3.50"` becomes `"3.5"`).
///
/// # Errors
/// Returns `HelperError::NotNumeric` if `value` does not parse.
pub fn strip_trailing_zeros(value: &str) -> Result<String> {
    parse_numeric(value)
        .map(|v| v.to_string())
        .ok_or_else(|| HelperError::NotNumeric(value.to_owned()))
}

/// Pads `number` to exactly `precision` fractional digits when it has no more
/// than that many; a number with more digits is rendered as is.
///
/// Digits are counted on the decimal rendering, so `2.3` pads to `"2.30"`
/// even though `2.3 * 100.0` is not a whole number in binary.
pub fn min_precision(number: f64, precision: u8) -> String {
    let padded = format!("{number:.prec$}", prec = usize::from(precision));
    if padded.parse::<f64>() == Ok(number) {
        padded
    } else {
        number.to_string()
    }
}

/// Converts a currency string such as `"$1,234.50"` into whole cents.
///
/// Everything except digits, `.` and `-` is discarded first. The product is
/// rounded to the nearest cent, half away from zero, so `"$19.99"` gives
/// `1999` and `"$0.125"` gives `13`. Returns `None` when what remains is empty
/// or not a number (`"free"`, `"1-2"`), or when the amount is too large to
/// count in cents exactly.
pub fn dollars_to_cents(value: &str) -> Option<i64> {
    let amount: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let Some(dollars) = parse_numeric(&amount) else {
        debug!(input = value, residual = %amount, "currency string is not a number");
        return None;
    };

    let cents = (dollars * CENTS_PER_DOLLAR).round();
    if cents.abs() > MAX_EXACT_CENTS {
        debug!(input = value, cents, "currency amount out of range");
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    Some(cents as i64)
}

/// Returns the fractional part of a number, `x - floor(x)`.
///
/// # Errors
/// Returns `HelperError::NotNumeric` if `value` does not parse.
pub fn get_fraction(value: &str) -> Result<f64> {
    let number = parse_numeric(value).ok_or_else(|| HelperError::NotNumeric(value.to_owned()))?;
    Ok(number - number.floor())
}

/// Scales a fraction to a percentage, `0.25` to `25.0`.
///
/// Undone by [`percent_to_decimal`] up to one rounding step: the result is
/// within `2 * f64::EPSILON` of the input, relative, but not always equal
/// (`0.007` comes back as `0.007000000000000001`). Values beyond
/// `f64::MAX / 100` overflow to infinity.
pub fn decimal_to_percent(value: f64) -> f64 {
    value * PERCENT_SCALE
}

/// Scales a percentage to a fraction, `25.0` to `0.25`.
pub fn percent_to_decimal(value: f64) -> f64 {
    value / PERCENT_SCALE
}

/// Converts inches to yards. Like the percent pair, a round trip through
/// [`yards_to_inches`] agrees with the input to within one rounding step.
pub fn inches_to_yards(inches: f64) -> f64 {
    inches / INCHES_PER_YARD
}

/// Converts yards to inches.
pub fn yards_to_inches(yards: f64) -> f64 {
    yards * INCHES_PER_YARD
}

/// Parity of an integer. `%` truncates, so negative values work as expected:
/// `-4` is even and `-3` is odd.
pub const fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// Complement of [`is_even`]; `-3 % 2` is `-1`, which still counts as odd.
pub const fn is_odd(n: i64) -> bool {
    n % 2 != 0
}
