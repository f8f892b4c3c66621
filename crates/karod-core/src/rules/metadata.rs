//! Document-level metadata heuristics: entity name and reporting period.

use tracing::debug;

use super::patterns::{AS_AT, BARE_DATE, ENTITY_SUFFIX, FOR_THE_PERIOD, PERIOD_ENDED, SKIP_MARKERS};
use crate::geometry::PageGeometry;
use crate::models::config::MetadataConfig;
use crate::models::document::{DocumentMetadata, UnitSpec};

/// Derive best-effort descriptive fields from page text.
///
/// Both heuristics are first-match-wins over ordered patterns; absence of a
/// field is a normal outcome, never a failure.
pub fn extract_metadata<P: PageGeometry>(
    pages: &[P],
    unit: &UnitSpec,
    total_tables: usize,
    config: &MetadataConfig,
) -> DocumentMetadata {
    let entity_name = extract_entity_name(pages, config.entity_scan_pages);
    let period = extract_period(pages, config.period_scan_pages);

    debug!(
        entity = entity_name.as_deref().unwrap_or("(not detected)"),
        period = period.as_deref().unwrap_or("(not detected)"),
        "metadata heuristics done"
    );

    DocumentMetadata {
        unit: unit.unit,
        divisor: unit.divisor,
        total_pages: pages.len(),
        total_tables,
        entity_name,
        period,
    }
}

/// Scan the leading pages line by line for the reporting entity's name.
///
/// Lines carrying structural markers ("balance sheet", "notes to", ...) are
/// skipped; the first remaining line containing an entity-suffix token
/// (limited/ltd/pvt/...) wins and the search stops immediately.
fn extract_entity_name<P: PageGeometry>(pages: &[P], scan_pages: usize) -> Option<String> {
    for page in pages.iter().take(scan_pages) {
        for line in page.text().lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let lowered = line.to_lowercase();
            if SKIP_MARKERS.iter().any(|marker| lowered.contains(marker)) {
                continue;
            }
            if ENTITY_SUFFIX.is_match(line) {
                return Some(line.to_string());
            }
        }
    }
    None
}

/// Apply the ordered period pattern list to the leading pages' text.
fn extract_period<P: PageGeometry>(pages: &[P], scan_pages: usize) -> Option<String> {
    let text = pages
        .iter()
        .take(scan_pages)
        .map(|p| p.text())
        .collect::<Vec<_>>()
        .join("\n");

    for pattern in [&*PERIOD_ENDED, &*AS_AT, &*FOR_THE_PERIOD, &*BARE_DATE] {
        if let Some(caps) = pattern.captures(&text) {
            return Some(caps[1].trim().to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::geometry::StaticPage;
    use crate::models::document::Unit;

    fn meta(pages: &[StaticPage]) -> DocumentMetadata {
        extract_metadata(
            pages,
            &UnitSpec::new(Unit::Lacs),
            0,
            &MetadataConfig::default(),
        )
    }

    #[test]
    fn test_entity_name_first_match_wins() {
        let pages = [
            StaticPage::new("Statement of Profit and Loss\nExample Industries Limited\nAnother Company Ltd"),
        ];
        let m = meta(&pages);
        assert_eq!(m.entity_name.as_deref(), Some("Example Industries Limited"));
    }

    #[test]
    fn test_entity_name_skips_structural_lines() {
        // A marker line that also carries "Limited" must still be skipped.
        let pages = [StaticPage::new(
            "Notes to accounts of Example Limited\nBalance Sheet\nAcme Pvt Ltd",
        )];
        let m = meta(&pages);
        assert_eq!(m.entity_name.as_deref(), Some("Acme Pvt Ltd"));
    }

    #[test]
    fn test_entity_name_only_first_three_pages() {
        let pages = [
            StaticPage::new("cover"),
            StaticPage::new("contents"),
            StaticPage::new("figures"),
            StaticPage::new("Hidden Deep Limited"),
        ];
        let m = meta(&pages);
        assert_eq!(m.entity_name, None);
    }

    #[test]
    fn test_period_ended() {
        let pages = [StaticPage::new(
            "Audited results for the year ended 31st March 2025",
        )];
        let m = meta(&pages);
        assert_eq!(m.period.as_deref(), Some("31st March 2025"));
    }

    #[test]
    fn test_period_as_at() {
        let pages = [StaticPage::new("Balance Sheet as at 31 March 2024")];
        let m = meta(&pages);
        assert_eq!(m.period.as_deref(), Some("31 March 2024"));
    }

    #[test]
    fn test_period_bare_date_fallback() {
        let pages = [StaticPage::new("Approved on: 12th June 2024 by the board")];
        let m = meta(&pages);
        assert_eq!(m.period.as_deref(), Some("12th June 2024"));
    }

    #[test]
    fn test_absent_fields_are_normal() {
        let pages = [StaticPage::new("nothing recognizable here")];
        let m = meta(&pages);
        assert_eq!(m.entity_name, None);
        assert_eq!(m.period, None);
        assert_eq!(m.unit, Unit::Lacs);
        assert_eq!(m.total_pages, 1);
    }
}
