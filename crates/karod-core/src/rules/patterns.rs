//! Common regex patterns for statement extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Year/date guard: tokens like "2024-25" or "2024/03/31" must never be
    // treated as convertible amounts even when they parse numerically.
    pub static ref YEAR_DATE_GUARD: Regex = Regex::new(
        r"^\d{4}[-/]"
    ).unwrap();

    // Entity suffix tokens that mark a line as a company name.
    pub static ref ENTITY_SUFFIX: Regex = Regex::new(
        r"(?i)\b(?:limited|ltd|pvt|private|inc|corp|llp)\b"
    ).unwrap();

    // Reporting period patterns, most specific first. Group 1 is the
    // captured date fragment in every variant.
    pub static ref PERIOD_ENDED: Regex = Regex::new(
        r"(?i)(?:year|period)\s+ended?\s+(.+?\d{4})"
    ).unwrap();

    pub static ref AS_AT: Regex = Regex::new(
        r"(?i)as\s+(?:at|on)\s+(.+?\d{4})"
    ).unwrap();

    pub static ref FOR_THE_PERIOD: Regex = Regex::new(
        r"(?i)for\s+the\s+(?:year|period)\s+(.+?\d{4})"
    ).unwrap();

    pub static ref BARE_DATE: Regex = Regex::new(
        r"(?i)(\d{1,2}(?:st|nd|rd|th)?\s+\w+\s+\d{4})"
    ).unwrap();
}

/// Structural header markers; a line containing any of these is never an
/// entity name.
pub const SKIP_MARKERS: &[&str] = &[
    "balance sheet",
    "profit and loss",
    "cash flow",
    "statement of",
    "notes to",
    "independent auditor",
    "amount in",
    "particulars",
    "schedule",
    "annexure",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_date_guard() {
        assert!(YEAR_DATE_GUARD.is_match("2024-25"));
        assert!(YEAR_DATE_GUARD.is_match("2024/03/31"));
        assert!(!YEAR_DATE_GUARD.is_match("1,00,000"));
        assert!(!YEAR_DATE_GUARD.is_match("202-4"));
    }

    #[test]
    fn test_entity_suffix() {
        assert!(ENTITY_SUFFIX.is_match("Example Industries Limited"));
        assert!(ENTITY_SUFFIX.is_match("ACME PVT LTD"));
        // "unlimited" must not match on a word boundary.
        assert!(!ENTITY_SUFFIX.is_match("unlimited liability"));
    }

    #[test]
    fn test_period_patterns_capture_fragment() {
        let caps = PERIOD_ENDED.captures("for the year ended 31st March 2025").unwrap();
        assert_eq!(&caps[1], "31st March 2025");

        let caps = AS_AT.captures("As at 31 March 2024").unwrap();
        assert_eq!(&caps[1], "31 March 2024");
    }
}
