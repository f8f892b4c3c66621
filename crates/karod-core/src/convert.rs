//! Unit conversion of raw tables to crores.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::document::{NormalizedTable, RawTable};
use crate::rules::numerals::parse_number;
use crate::rules::patterns::YEAR_DATE_GUARD;

/// Convert a single cell, if it is a convertible number.
///
/// Returns `None` when the cell must pass through unchanged: unparseable
/// text, or a year/date-like token ("2024-25", "2024/03/31") that would
/// otherwise be mangled by division.
pub fn convert_cell(cell: &str, divisor: Decimal) -> Option<String> {
    let trimmed = cell.trim();
    let value = parse_number(trimmed)?;
    if YEAR_DATE_GUARD.is_match(trimmed) {
        return None;
    }
    if divisor.is_zero() {
        return None;
    }
    let scaled = (value / divisor).round_dp_with_strategy(4, RoundingStrategy::MidpointNearestEven);
    Some(format!("{:.4}", scaled))
}

/// Convert every numeric cell of a table to crores.
///
/// Non-numeric and date-like cells pass through unchanged. A divisor of
/// exactly 1 means the table is already canonical and the rows are copied
/// as-is, without reformatting.
pub fn convert_table(table: &RawTable, divisor: Decimal) -> NormalizedTable {
    if divisor == Decimal::ONE {
        return passthrough_table(table);
    }

    let rows = table
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| convert_cell(cell, divisor).unwrap_or_else(|| cell.clone()))
                .collect()
        })
        .collect();

    NormalizedTable {
        page: table.page,
        index: table.index,
        rows,
    }
}

/// Copy a table through unconverted, keeping the normalized shape.
///
/// Used when the document's unit is unknown and for already-canonical
/// (divisor 1) documents.
pub fn passthrough_table(table: &RawTable) -> NormalizedTable {
    NormalizedTable {
        page: table.page,
        index: table.index,
        rows: table.rows.clone(),
    }
}
