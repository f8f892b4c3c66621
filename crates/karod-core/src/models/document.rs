//! Document-level data models: tables, units, and extraction metadata.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unit of measure the source document reports its figures in.
///
/// Divisors are relative to the canonical crore (1 crore = 10^7 rupees):
/// a value reported "in lacs" is divided by 100 to become crores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Already canonical.
    Crores,
    /// 100,000 rupees; 100 lacs = 1 crore.
    Lacs,
    /// 10 millions = 1 crore.
    Millions,
    /// 10,000 thousands = 1 crore.
    Thousands,
    /// Absolute rupees.
    Rupees,
    /// No unit marker found anywhere in the document.
    Unknown,
}

impl Unit {
    /// Divisor that brings a value in this unit to crores.
    ///
    /// `None` for [`Unit::Unknown`]: conversion is skipped for the whole
    /// document rather than guessed.
    pub fn divisor(&self) -> Option<Decimal> {
        match self {
            Unit::Crores => Some(Decimal::ONE),
            Unit::Lacs => Some(Decimal::from(100)),
            Unit::Millions => Some(Decimal::from(10)),
            Unit::Thousands => Some(Decimal::from(10_000)),
            Unit::Rupees => Some(Decimal::from(10_000_000)),
            Unit::Unknown => None,
        }
    }

    /// Lowercase name as it appears in metadata output.
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Crores => "crores",
            Unit::Lacs => "lacs",
            Unit::Millions => "millions",
            Unit::Thousands => "thousands",
            Unit::Rupees => "rupees",
            Unit::Unknown => "unknown",
        }
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::Unknown
    }
}

/// The unit inferred for a whole document, with its conversion divisor.
///
/// Exactly one is derived per document: the system assumes unit consistency
/// across the filing. Callers that know a section uses a different unit can
/// pass their own divisor to [`crate::convert::convert_table`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSpec {
    /// Detected unit.
    pub unit: Unit,
    /// Divisor to crores, absent when the unit is unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divisor: Option<Decimal>,
}

impl UnitSpec {
    pub fn new(unit: Unit) -> Self {
        Self {
            unit,
            divisor: unit.divisor(),
        }
    }

    /// Spec for an undetectable unit.
    pub fn unknown() -> Self {
        Self::new(Unit::Unknown)
    }
}

/// A table as it came out of the geometry backend: raw cell strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    /// Page the table was found on (1-based).
    pub page: u32,
    /// Index of the table within its page (0-based).
    pub index: usize,
    /// Row-major cell text. Every table has at least 2 rows; single-row
    /// detections are header noise and are discarded by the extractor.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(page: u32, index: usize, rows: Vec<Vec<String>>) -> Self {
        Self { page, index, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest row, for inventory summaries.
    pub fn col_count(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }
}

/// A [`RawTable`] with its numeric cells rescaled to crores.
///
/// Same shape as its source; numeric cells are replaced by the converted
/// value formatted to 4 decimal places, every other cell passes through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTable {
    /// Page of the source table (1-based).
    pub page: u32,
    /// Index of the source table within its page (0-based).
    pub index: usize,
    /// Row-major cell text after conversion.
    pub rows: Vec<Vec<String>>,
}

/// Best-effort descriptive fields for a document.
///
/// Absent fields mean "not detected", never a parsing failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Detected unit name.
    pub unit: Unit,
    /// Divisor to crores, if the unit was detected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divisor: Option<Decimal>,
    /// Number of pages in the document.
    pub total_pages: usize,
    /// Number of tables extracted across all pages.
    pub total_tables: usize,
    /// Reporting entity name (e.g. "Example Industries Limited").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    /// Reporting period fragment (e.g. "31st March 2025").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

/// Everything the pipeline produces for one document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentExtract {
    /// Document-wide unit spec.
    pub unit: UnitSpec,
    /// Tables with cell text as extracted.
    pub tables: Vec<RawTable>,
    /// Tables with numeric cells converted to crores. When the unit is
    /// unknown these are straight copies of the raw tables.
    pub normalized_tables: Vec<NormalizedTable>,
    /// Document-level metadata.
    pub metadata: DocumentMetadata,
    /// Non-fatal caveats encountered during extraction.
    pub warnings: Vec<String>,
}
