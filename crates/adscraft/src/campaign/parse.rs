//! Lenient numeric readers for the free-text form fields.
//!
//! Money fields arrive as whatever the user typed ("R$ 1.000", "1000,00").
//! Anything that does not yield a finite number reads as zero.

/// Reads a monetary amount: keeps digits, `.` and `-`, then parses the
/// longest leading `-digits.digits` run.
pub fn parse_amount(raw: &str) -> f64 {
    let kept: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == '-')
        .collect();

    decimal_prefix(&kept)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Same as [`parse_amount`] with absent values reading as zero.
pub fn parse_optional_amount(raw: Option<&str>) -> f64 {
    raw.map(parse_amount).unwrap_or(0.0)
}

/// Reads a whole count from the leading `[+-]digits` run after whitespace.
pub fn parse_count(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 0;
    };

    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return 0;
    }

    // overflow saturates instead of discarding the count
    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn decimal_prefix(kept: &str) -> Option<&str> {
    let bytes = kept.as_bytes();
    let mut end = 0;

    if bytes.first() == Some(&b'-') {
        end += 1;
    }

    let int_digits = bytes[end..].iter().take_while(|b| b.is_ascii_digit()).count();
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = bytes[end + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if frac_digits > 0 || int_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        None
    } else {
        Some(&kept[..end])
    }
}

/// Rounds half away from zero to two decimal places.
pub fn round_cents(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.is_finite() {
        rounded
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_strip_currency_and_grouping() {
        assert_eq!(parse_amount("1000"), 1000.0);
        assert_eq!(parse_amount("R$ 1500.50"), 1500.5);
        assert_eq!(parse_amount("  2500 reais"), 2500.0);
        // comma is dropped, not read as a decimal separator
        assert_eq!(parse_amount("1000,00"), 100000.0);
    }

    #[test]
    fn amounts_parse_only_the_leading_number() {
        assert_eq!(parse_amount("1.2.3"), 1.2);
        assert_eq!(parse_amount("-50"), -50.0);
        assert_eq!(parse_amount("10-20"), 10.0);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("7."), 7.0);
    }

    #[test]
    fn unreadable_amounts_fall_back_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("-"), 0.0);
        assert_eq!(parse_amount("."), 0.0);
        assert_eq!(parse_amount("--5"), 0.0);
        assert_eq!(parse_optional_amount(None), 0.0);
    }

    #[test]
    fn huge_amounts_never_become_infinite() {
        let raw = "9".repeat(400);
        assert_eq!(parse_amount(&raw), 0.0);
    }

    #[test]
    fn counts_read_leading_integer() {
        assert_eq!(parse_count(Some("100")), 100);
        assert_eq!(parse_count(Some(" 42 clientes")), 42);
        assert_eq!(parse_count(Some("12.9")), 12);
        assert_eq!(parse_count(Some("-3")), -3);
        assert_eq!(parse_count(Some("+8")), 8);
        assert_eq!(parse_count(Some("cem")), 0);
        assert_eq!(parse_count(None), 0);
    }

    #[test]
    fn cents_round_half_away_from_zero() {
        assert_eq!(round_cents(25.0), 25.0);
        assert_eq!(round_cents(1.234), 1.23);
        assert_eq!(round_cents(1.235_1), 1.24);
    }
}
