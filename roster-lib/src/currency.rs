//! Currency cell parsing and display formatting.
//!
//! Cells in the salary column display as `$` plus a thousands-grouped
//! amount. Parsing strips that formatting first and only accepts a value
//! the whole remaining string describes; there is no prefix parsing and
//! no NaN sentinel.

/// Remove currency formatting characters (`$` and thousands separators).
pub fn strip_formatting(text: &str) -> String {
    text.chars().filter(|c| *c != '$' && *c != ',').collect()
}

/// Attempt a numeric parse of a (possibly currency-formatted) cell.
/// Returns `None` unless the entire stripped string is a finite number.
pub fn parse_amount(text: &str) -> Option<f64> {
    let stripped = strip_formatting(text.trim());
    if stripped.is_empty() {
        return None;
    }
    stripped.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format an amount with comma-grouped integer digits and at most three
/// fraction digits, trailing zeros trimmed: 50000 -> "50,000",
/// 1234.5 -> "1,234.5".
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    // Round to three fraction digits before splitting, so 0.9995 carries
    // into the integer part.
    let rounded = (value.abs() * 1000.0).round() / 1000.0;
    let int_part = rounded.trunc() as u64;

    let digits = int_part.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    if negative {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    let frac = ((rounded.fract() * 1000.0).round() as u64).min(999);
    if frac > 0 {
        let mut frac_digits = format!("{frac:03}");
        while frac_digits.ends_with('0') {
            frac_digits.pop();
        }
        out.push('.');
        out.push_str(&frac_digits);
    }

    out
}

/// The display form of a salary cell.
pub fn display(value: f64) -> String {
    format!("${}", format_amount(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_dollar_and_commas() {
        assert_eq!(strip_formatting("$1,200,000"), "1200000");
        assert_eq!(strip_formatting("plain"), "plain");
    }

    #[test]
    fn parse_requires_whole_string() {
        assert_eq!(parse_amount("$1,200"), Some(1200.0));
        assert_eq!(parse_amount("  950 "), Some(950.0));
        assert_eq!(parse_amount("12abc"), None);
        assert_eq!(parse_amount("N/A"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(950.0), "950");
        assert_eq!(format_amount(50_000.0), "50,000");
        assert_eq!(format_amount(1_234_567.0), "1,234,567");
    }

    #[test]
    fn keeps_short_fractions() {
        assert_eq!(format_amount(1234.5), "1,234.5");
        assert_eq!(format_amount(0.125), "0.125");
        assert_eq!(format_amount(2.0), "2");
    }

    #[test]
    fn display_is_dollar_prefixed() {
        assert_eq!(display(2000.0), "$2,000");
    }
}
