//! Rupiah currency formatting and numeric-string sanitization.

/// Strip every non-digit character from `input`.
///
/// Returns the empty string when nothing remains. Useful for cleaning up
/// numeric input (e.g. `"Rp 1.234.567,00"`) before conversion.
pub fn sanitize_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Format a raw value as Indonesian Rupiah.
///
/// Empty input renders as the empty string. Anything else is reduced to its
/// digits first; input without any digit renders as `"Rp 0"` (the original
/// behavior for non-numeric input).
pub fn format_currency(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let digits = sanitize_digits(value);
    format!("Rp {}", group_thousands(&digits))
}

/// Format a numeric amount as Indonesian Rupiah.
pub fn format_amount(value: u64) -> String {
    format!("Rp {}", group_thousands(&value.to_string()))
}

/// Insert id-ID thousands separators (`.`) into a digit string.
///
/// Leading zeros are dropped so `"007"` renders as `"7"`; an empty digit
/// string renders as `"0"`.
fn group_thousands(digits: &str) -> String {
    let canonical = digits.trim_start_matches('0');
    let canonical = if canonical.is_empty() { "0" } else { canonical };

    let offset = canonical.len() % 3;
    let mut out = String::with_capacity(canonical.len() + canonical.len() / 3);
    for (i, c) in canonical.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
