//! The per-document extraction pipeline.
//!
//! Tables and unit detection run independently over the same page set; the
//! conversion step consumes both. Everything is synchronous and holds no
//! cross-document state, so callers may process documents concurrently with
//! independent invocations.

use tracing::{debug, info, warn};

use crate::convert::{convert_table, passthrough_table};
use crate::error::Result;
use crate::geometry::PageGeometry;
use crate::models::config::KarodConfig;
use crate::models::document::DocumentExtract;
use crate::rules::metadata::extract_metadata;
use crate::rules::units::detect_unit;
use crate::tables::extract_all_tables;

/// Run the full pipeline over one document's pages.
///
/// The only error path is a geometry backend failure, which aborts this
/// document alone; batch callers are expected to continue with the rest.
/// Every other ambiguity (no tables, unknown unit, missing metadata)
/// resolves to an absent value or a warning.
pub fn process_document<P: PageGeometry>(
    pages: &[P],
    config: &KarodConfig,
) -> Result<DocumentExtract> {
    let mut warnings = Vec::new();

    info!(pages = pages.len(), "processing document");

    let tables = extract_all_tables(pages, &config.tables)?;
    debug!(tables = tables.len(), "table extraction done");

    let full_text = pages
        .iter()
        .map(|p| p.text())
        .collect::<Vec<_>>()
        .join("\n");
    let unit = detect_unit(&full_text);

    let normalized_tables = match unit.divisor {
        Some(divisor) => {
            info!(unit = unit.unit.name(), %divisor, "detected number format");
            tables.iter().map(|t| convert_table(t, divisor)).collect()
        }
        None => {
            warn!("could not detect number format; values left unconverted");
            warnings.push(
                "could not detect number format; raw values surfaced unconverted".to_string(),
            );
            tables.iter().map(passthrough_table).collect()
        }
    };

    let metadata = extract_metadata(pages, &unit, tables.len(), &config.metadata);

    Ok(DocumentExtract {
        unit,
        tables,
        normalized_tables,
        metadata,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::geometry::{Grid, StaticPage};
    use crate::models::document::Unit;
    use rust_decimal::Decimal;

    fn grid(rows: &[&[&str]]) -> Grid {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_end_to_end_lacs_document() {
        let pages = vec![
            StaticPage::new("Example Industries Limited\n(Amount in ₹ Lacs)\nYear ended 31st March 2025")
                .with_lined(grid(&[
                    &["Particulars", "Q1"],
                    &["Revenue", "1,50,000"],
                    &["Profit", "(5,000)"],
                ])),
            StaticPage::new("Notes to the accounts"),
        ];

        let result = process_document(&pages, &KarodConfig::default()).unwrap();

        assert_eq!(result.unit.unit, Unit::Lacs);
        assert_eq!(result.unit.divisor, Some(Decimal::from(100)));
        assert_eq!(result.tables.len(), 1);
        assert_eq!(
            result.normalized_tables[0].rows,
            vec![
                vec!["Particulars".to_string(), "Q1".to_string()],
                vec!["Revenue".to_string(), "1500.0000".to_string()],
                vec!["Profit".to_string(), "-50.0000".to_string()],
            ]
        );
        assert_eq!(
            result.metadata.entity_name.as_deref(),
            Some("Example Industries Limited")
        );
        assert_eq!(result.metadata.period.as_deref(), Some("31st March 2025"));
        assert_eq!(result.metadata.total_pages, 2);
        assert_eq!(result.metadata.total_tables, 1);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_unknown_unit_passes_raw_through_with_warning() {
        let pages = vec![StaticPage::new("no unit marker").with_lined(grid(&[
            &["Particulars", "FY24"],
            &["Revenue", "1,000"],
        ]))];

        let result = process_document(&pages, &KarodConfig::default()).unwrap();

        assert_eq!(result.unit.unit, Unit::Unknown);
        assert!(result.unit.divisor.is_none());
        assert_eq!(result.normalized_tables[0].rows, result.tables[0].rows);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_already_in_crores_copies_raw() {
        let pages = vec![StaticPage::new("(₹ in Crores)").with_lined(grid(&[
            &["Particulars", "Amount"],
            &["Revenue", "1,234.5"],
        ]))];

        let result = process_document(&pages, &KarodConfig::default()).unwrap();

        assert_eq!(result.unit.unit, Unit::Crores);
        // Divisor 1: straight copy, no reformatting.
        assert_eq!(result.normalized_tables[0].rows[1][1], "1,234.5");
    }

    #[test]
    fn test_empty_document() {
        let pages: Vec<StaticPage> = vec![StaticPage::new("")];
        let result = process_document(&pages, &KarodConfig::default()).unwrap();
        assert!(result.tables.is_empty());
        assert_eq!(result.metadata.total_tables, 0);
    }
}
