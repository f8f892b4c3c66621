//! Locale-aware numeral parsing for statement cells.
//!
//! Handles Indian digit grouping, parenthesized negatives, currency symbols
//! and nil indicators:
//!
//! ```text
//! "12,563.39"  -> 12563.39
//! "(1,897.73)" -> -1897.73
//! "1,00,000"   -> 100000
//! "-"          -> 0
//! ""           -> None (not a number)
//! "N/A"        -> 0
//! ```

use rust_decimal::Decimal;

/// Parse one textual cell into a numeric value.
///
/// `None` means "not a number": the cell is a label, a date, or otherwise
/// opaque, and downstream components must leave it untouched. A reported nil
/// (bare dash, "Nil", "N/A") is a number: zero. An empty cell is not.
pub fn parse_number(cell: &str) -> Option<Decimal> {
    let text = cell.trim();

    if text.is_empty() {
        return None;
    }

    // Nil indicators represent a reported value of zero. Checked before
    // sign handling so a bare "-" maps to zero, not to an empty negative.
    if is_nil_token(text) {
        return Some(Decimal::ZERO);
    }

    // Parenthesized negatives: (1,897.73). Sign detection happens before
    // any other normalization.
    let (negative, text) = if let Some(inner) =
        text.strip_prefix('(').and_then(|t| t.strip_suffix(')'))
    {
        (true, inner.trim())
    } else if let Some(rest) = text.strip_prefix('-') {
        (true, rest.trim())
    } else {
        (false, text)
    };

    // Strip currency symbols and internal whitespace, and delete every
    // digit-group comma (Indian or western grouping).
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '₹' | '$' | '€' | '£' | ',') && !c.is_whitespace())
        .collect();

    let value = cleaned
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(&cleaned).ok())?;

    Some(if negative { -value } else { value })
}

fn is_nil_token(text: &str) -> bool {
    matches!(text, "-" | "—" | "–")
        || text.eq_ignore_ascii_case("nil")
        || text.eq_ignore_ascii_case("n/a")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_plain_and_grouped() {
        assert_eq!(parse_number("12,563.39"), Some(dec("12563.39")));
        assert_eq!(parse_number("1,00,000"), Some(dec("100000")));
        assert_eq!(parse_number("42"), Some(dec("42")));
    }

    #[test]
    fn test_negatives() {
        assert_eq!(parse_number("(1,897.73)"), Some(dec("-1897.73")));
        assert_eq!(parse_number("-5,000"), Some(dec("-5000")));
        assert_eq!(parse_number("( 250.50 )"), Some(dec("-250.50")));
    }

    #[test]
    fn test_currency_and_whitespace() {
        assert_eq!(parse_number("₹ 12,563.39"), Some(dec("12563.39")));
        assert_eq!(parse_number("$1 234.56"), Some(dec("1234.56")));
    }

    #[test]
    fn test_nil_indicators() {
        assert_eq!(parse_number("-"), Some(Decimal::ZERO));
        assert_eq!(parse_number("—"), Some(Decimal::ZERO));
        assert_eq!(parse_number("–"), Some(Decimal::ZERO));
        assert_eq!(parse_number("Nil"), Some(Decimal::ZERO));
        assert_eq!(parse_number("NIL"), Some(Decimal::ZERO));
        assert_eq!(parse_number("n/a"), Some(Decimal::ZERO));
    }

    #[test]
    fn test_empty_is_not_a_number() {
        // Empty is missing data, not a reported nil.
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
    }

    #[test]
    fn test_non_numeric() {
        assert_eq!(parse_number("Particulars"), None);
        assert_eq!(parse_number("2024-25"), None);
        assert_eq!(parse_number("Note 3(a)"), None);
    }

    #[test]
    fn test_roundtrip_at_four_decimals() {
        for s in ["12,563.39", "(1,897.73)", "0.0001", "1,00,000"] {
            let value = parse_number(s).unwrap();
            let formatted = format!("{:.4}", value);
            assert_eq!(parse_number(&formatted), Some(value.round_dp(4)));
        }
    }
}
