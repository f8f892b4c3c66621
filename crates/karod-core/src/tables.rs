//! Two-pass table extraction over the page geometry backend.
//!
//! Pass 1 asks for ruled grids (explicit line detection); if that yields any
//! usable table the page is done. Pass 2 falls back to whitespace/text
//! clustering for unruled tables. The fallback is a short-circuit, not a
//! merge: the ruled pass is the higher-confidence signal, and mixing in the
//! looser pass would over-segment pages that are actually ruled.

use tracing::debug;

use crate::error::Result;
use crate::geometry::{Grid, GridSettings, PageGeometry};
use crate::models::config::TableConfig;
use crate::models::document::RawTable;

/// Extract tables from a single page.
///
/// Grids with fewer than `config.min_rows` rows are discarded in both
/// passes; single-row detections are header noise, not tables. The table
/// index preserves the backend's ordering, including discarded grids.
pub fn extract_page_tables<P: PageGeometry>(
    page: &P,
    page_num: u32,
    config: &TableConfig,
) -> Result<Vec<RawTable>> {
    // Pass 1: ruled-grid strategy.
    let mut results = keep_usable(page.grids(&GridSettings::lines())?, page_num, config);
    if !results.is_empty() {
        debug!(page = page_num, tables = results.len(), "ruled pass accepted");
        return Ok(results);
    }

    // Pass 2: text-clustering fallback.
    results = keep_usable(
        page.grids(&GridSettings::text_clusters(config))?,
        page_num,
        config,
    );
    if !results.is_empty() {
        debug!(page = page_num, tables = results.len(), "text fallback accepted");
    }
    Ok(results)
}

fn keep_usable(grids: Vec<Grid>, page_num: u32, config: &TableConfig) -> Vec<RawTable> {
    grids
        .into_iter()
        .enumerate()
        .filter(|(_, grid)| grid.len() >= config.min_rows)
        .map(|(idx, grid)| RawTable::new(page_num, idx, grid))
        .collect()
}

/// Extract tables from every page, tagged with 1-based page numbers.
pub fn extract_all_tables<P: PageGeometry>(
    pages: &[P],
    config: &TableConfig,
) -> Result<Vec<RawTable>> {
    let mut all = Vec::new();
    for (i, page) in pages.iter().enumerate() {
        let tables = extract_page_tables(page, (i + 1) as u32, config)?;
        all.extend(tables);
    }
    Ok(all)
}
