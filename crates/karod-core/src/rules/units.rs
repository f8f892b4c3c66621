//! Unit-of-measure detection from document prose.
//!
//! Financial filings announce their unit in a marker phrase somewhere in the
//! text ("Amount in ₹ Lacs", "Figures in Crores", "₹ '000"). The detector is
//! an ordered rule table evaluated against the case-folded full document
//! text; the first matching rule wins. Crore patterns are listed first so an
//! explicit crore marker is never shadowed by a looser phrase (e.g. a
//! generic "in millions" inside an unrelated sentence).

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::document::{Unit, UnitSpec};

lazy_static! {
    /// Ordered (pattern, unit) rules, most specific first. Patterns are
    /// matched against lowercased text.
    static ref UNIT_RULES: Vec<(Regex, Unit)> = vec![
        // Crores
        rule(
            r"(?:amount|figures?|rs\.?|₹|rupees?)\s*(?:are\s+)?(?:in\s+)?(?:₹\s*)?(?:in\s+)?cr(?:ore)?s?",
            Unit::Crores,
        ),
        rule(r"\(?\s*₹\s*(?:in\s+)?cr(?:ore)?s?\s*\)?", Unit::Crores),
        rule(r"in\s+crore", Unit::Crores),
        // Lakhs / Lacs
        rule(
            r"(?:amount|figures?|rs\.?|₹|rupees?)\s*(?:are\s+)?(?:in\s+)?(?:₹\s*)?(?:in\s+)?la(?:kh|c)s?",
            Unit::Lacs,
        ),
        rule(r"\(?\s*₹\s*(?:in\s+)?la(?:kh|c)s?\s*\)?", Unit::Lacs),
        rule(r"in\s+la(?:kh|c)s?", Unit::Lacs),
        // Millions
        rule(
            r"(?:amount|figures?|rs\.?|₹|rupees?)\s*(?:are\s+)?(?:in\s+)?(?:₹\s*)?(?:in\s+)?millions?",
            Unit::Millions,
        ),
        rule(r"in\s+millions?", Unit::Millions),
        // Thousands
        rule(
            r"(?:amount|figures?|rs\.?|₹|rupees?)\s*(?:are\s+)?(?:in\s+)?(?:₹\s*)?(?:in\s+)?thousands?",
            Unit::Thousands,
        ),
        rule(r"₹\s*['\u{2018}\u{2019}]000", Unit::Thousands),
        rule(r"in\s+thousands?", Unit::Thousands),
        // Absolute rupees (least specific, matched last)
        rule(
            r"(?:amount|figures?)\s+(?:are\s+)?in\s+(?:rs\.?|₹|rupees?)\s*$",
            Unit::Rupees,
        ),
    ];
}

fn rule(pattern: &str, unit: Unit) -> (Regex, Unit) {
    (Regex::new(pattern).expect("invalid unit pattern"), unit)
}

/// Infer the document's unit of measure from its full text.
///
/// Returns [`UnitSpec::unknown`] when no rule matches; that is a valid
/// terminal state, not an error.
pub fn detect_unit(full_text: &str) -> UnitSpec {
    let lowered = full_text.to_lowercase();
    for (pattern, unit) in UNIT_RULES.iter() {
        if pattern.is_match(&lowered) {
            return UnitSpec::new(*unit);
        }
    }
    UnitSpec::unknown()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    #[test]
    fn test_detect_lacs() {
        let spec = detect_unit("Standalone results (₹ in Lacs) for the quarter");
        assert_eq!(spec.unit, Unit::Lacs);
        assert_eq!(spec.divisor, Some(Decimal::from(100)));
    }

    #[test]
    fn test_detect_lakhs_spelling() {
        let spec = detect_unit("Amount in ₹ Lakhs");
        assert_eq!(spec.unit, Unit::Lacs);
    }

    #[test]
    fn test_detect_crores() {
        let spec = detect_unit("All figures are in crores unless stated otherwise");
        assert_eq!(spec.unit, Unit::Crores);
        assert_eq!(spec.divisor, Some(Decimal::ONE));
    }

    #[test]
    fn test_crore_marker_wins_over_lacs() {
        // Ordering precedence: crore rules come first.
        let text = "Summary (₹ in Cr)\nNote schedules are stated in lacs";
        let spec = detect_unit(text);
        assert_eq!(spec.unit, Unit::Crores);
    }

    #[test]
    fn test_detect_thousands_tick_marker() {
        let spec = detect_unit("Figures ₹ '000");
        assert_eq!(spec.unit, Unit::Thousands);
        assert_eq!(spec.divisor, Some(Decimal::from(10_000)));
    }

    #[test]
    fn test_detect_millions() {
        let spec = detect_unit("Revenue is reported in millions");
        assert_eq!(spec.unit, Unit::Millions);
        assert_eq!(spec.divisor, Some(Decimal::from(10)));
    }

    #[test]
    fn test_detect_absolute_rupees() {
        let spec = detect_unit("All figures are in Rs.");
        assert_eq!(spec.unit, Unit::Rupees);
        assert_eq!(spec.divisor, Some(Decimal::from(10_000_000)));
    }

    #[test]
    fn test_undetectable() {
        let spec = detect_unit("No unit marker anywhere in this text");
        assert_eq!(spec.unit, Unit::Unknown);
        assert_eq!(spec.divisor, None);
    }
}
