//! pt-BR money rendering: `R$ 1.234,50`.
//!
//! Amounts are kept as raw `f64` everywhere else in the crate and only pass
//! through here at render time. [`parse_currency`] exists for text that was
//! already formatted (user input, pasted cells).

use thiserror::Error;

pub const CURRENCY_PREFIX: &str = "R$";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid amount '{text}'")]
pub struct MoneyParseError {
    pub text: String,
}

/// Renders `amount` as `R$ 1.234,50`. Negatives keep the sign after the
/// prefix (`R$ -1.234,50`). A negative that rounds to zero is printed
/// unsigned as `R$ 0,00`, deliberately not the `R$ -0,00` a plain `{:.2}`
/// rendering would give.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{CURRENCY_PREFIX} {amount}");
    }

    // Sign stays where the plain rendering puts it, after the prefix.
    let mut plain = format!("{amount:.2}");
    if plain == "-0.00" {
        plain.remove(0);
    }
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    format!(
        "{CURRENCY_PREFIX} {sign}{},{frac_part}",
        group_thousands(int_part)
    )
}

/// Inverse of [`format_currency`]. Only the pt-BR shape is accepted:
/// `1234,56` or `1.234,56`, optionally signed and prefixed with `R$`.
/// US-style text such as `1,234.56` is rejected instead of being misread.
pub fn parse_currency(text: &str) -> Result<f64, MoneyParseError> {
    let invalid = || MoneyParseError {
        text: text.to_string(),
    };

    let body = text.trim().trim_start_matches(CURRENCY_PREFIX).trim();
    if !is_pt_br_amount(body) {
        return Err(invalid());
    }

    let normalized = body.replace('.', "").replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid()),
    }
}

fn is_pt_br_amount(body: &str) -> bool {
    let unsigned = body.strip_prefix('-').unwrap_or(body);
    let (int_part, frac_part) = match unsigned.split_once(',') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if frac_part.is_some_and(|frac| !all_digits(frac)) {
        return false;
    }

    let mut groups = int_part.split('.');
    let Some(lead) = groups.next() else {
        return false;
    };
    if !int_part.contains('.') {
        return all_digits(lead);
    }
    all_digits(lead) && lead.len() <= 3 && groups.all(|group| all_digits(group) && group.len() == 3)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_grouping_and_decimal_comma() {
        assert_eq!(format_currency(1234.5), "R$ 1.234,50");
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(999.999), "R$ 1.000,00");
        assert_eq!(format_currency(1_234_567_890.12), "R$ 1.234.567.890,12");
        assert_eq!(format_currency(12.0), "R$ 12,00");
    }

    #[test]
    fn negative_sign_follows_prefix() {
        assert_eq!(format_currency(-1234.5), "R$ -1.234,50");
        assert_eq!(format_currency(-0.5), "R$ -0,50");
        assert_eq!(format_currency(-0.001), "R$ 0,00");
        assert_eq!(format_currency(-100.0), "R$ -100,00");
    }

    #[test]
    fn non_finite_amounts_render_verbatim() {
        assert_eq!(format_currency(f64::NAN), "R$ NaN");
        assert_eq!(format_currency(f64::INFINITY), "R$ inf");
        assert!(parse_currency(&format_currency(f64::NAN)).is_err());
    }

    #[test]
    fn parse_inverts_format() {
        let parsed = parse_currency(&format_currency(987_654.32)).expect("should parse");
        assert!((parsed - 987_654.32).abs() <= 1e-9);

        let parsed = parse_currency(&format_currency(-1234.5)).expect("should parse negative");
        assert!((parsed + 1234.5).abs() <= 1e-9);

        let parsed = parse_currency(&format_currency(0.0)).expect("should parse zero");
        assert_eq!(parsed, 0.0);
    }

    #[test]
    fn parse_accepts_text_without_prefix() {
        assert_eq!(parse_currency("1.234,56"), Ok(1234.56));
        assert_eq!(parse_currency("  R$ 10,00 "), Ok(10.0));
        assert_eq!(parse_currency("600.822.115,84"), Ok(600_822_115.84));
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = parse_currency("R$ abc").unwrap_err();
        assert_eq!(err.text, "R$ abc");
        assert!(parse_currency("").is_err());
        assert!(parse_currency("R$").is_err());
        assert!(parse_currency("-").is_err());
    }

    #[test]
    fn parse_rejects_foreign_and_broken_grouping() {
        for text in ["1,234.56", "1.2.3,4", "12.34,5,6", "1234.567,8", ".123,4", "1.234,", "12,3.4"] {
            assert!(parse_currency(text).is_err(), "{text} should be rejected");
        }
    }

    #[test]
    fn parse_accepts_signed_and_ungrouped_amounts() {
        assert_eq!(parse_currency("-1.500,75"), Ok(-1500.75));
        assert_eq!(parse_currency("R$ -0,50"), Ok(-0.5));
        assert_eq!(parse_currency("1234,5"), Ok(1234.5));
        assert_eq!(parse_currency("123"), Ok(123.0));
        assert_eq!(parse_currency("1.234"), Ok(1234.0));
    }
}
