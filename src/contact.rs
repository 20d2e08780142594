use crate::{PHONE_DIGITS_LOCAL, PHONE_DIGITS_WITH_COUNTRY};

/// Removes every character that is not an ASCII digit.
pub fn strip_non_numeric(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Formats a US phone number.
///
/// Punctuation in the input is ignored. Eleven digits render as
/// `1 (800) 555-5555`, ten as `(555) 555-5555`; any other digit count
/// returns `None`.
pub fn format_phone(value: &str) -> Option<String> {
    let digits = strip_non_numeric(value);

    match digits.len() {
        PHONE_DIGITS_WITH_COUNTRY => Some(format!(
            "{} ({}) {}-{}",
            &digits[..1],
            &digits[1..4],
            &digits[4..7],
            &digits[7..]
        )),
        PHONE_DIGITS_LOCAL => Some(format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])),
        _ => None,
    }
}
