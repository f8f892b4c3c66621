//! Page geometry capability interface.
//!
//! The core never talks to a concrete rendering engine. Anything that can
//! hand over a page's plain text and candidate table grids satisfies
//! [`PageGeometry`] and is substitutable: a live PDF layout engine, a page
//! dump read from disk, or a test fixture.

mod static_page;

pub use static_page::{StaticPage, StaticPageSet};

use crate::error::GeometryError;
use crate::models::config::TableConfig;

/// A rectangular grid of raw cell strings, row-major.
pub type Grid = Vec<Vec<String>>;

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;

/// How the backend should find cell boundaries on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridStrategy {
    /// Strict vertical/horizontal ruling-line detection. High confidence
    /// when the source table is actually ruled.
    Lines,
    /// Whitespace/text-alignment clustering. Looser, for unruled tables.
    TextClusters,
}

/// Settings for one grid query against the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSettings {
    /// Boundary detection strategy.
    pub strategy: GridStrategy,
    /// Snap tolerance for text clustering. Ignored by the lines strategy.
    pub snap_tolerance: f64,
    /// Join tolerance for text clustering. Ignored by the lines strategy.
    pub join_tolerance: f64,
    /// Minimum words stacked vertically to accept a column boundary.
    pub min_words_vertical: usize,
    /// Minimum words aligned horizontally to accept a row boundary.
    pub min_words_horizontal: usize,
}

impl GridSettings {
    /// Settings for the ruled-grid pass.
    pub fn lines() -> Self {
        Self {
            strategy: GridStrategy::Lines,
            snap_tolerance: 0.0,
            join_tolerance: 0.0,
            min_words_vertical: 0,
            min_words_horizontal: 0,
        }
    }

    /// Settings for the text-clustering fallback pass.
    pub fn text_clusters(config: &TableConfig) -> Self {
        Self {
            strategy: GridStrategy::TextClusters,
            snap_tolerance: config.snap_tolerance,
            join_tolerance: config.join_tolerance,
            min_words_vertical: config.min_words_vertical,
            min_words_horizontal: config.min_words_horizontal,
        }
    }
}

/// Capability interface a page source must provide.
pub trait PageGeometry {
    /// Plain extracted text of the page.
    fn text(&self) -> &str;

    /// Candidate table grids for the given settings. An empty vector is a
    /// valid result; errors mean the backend could not read the page at all.
    fn grids(&self, settings: &GridSettings) -> Result<Vec<Grid>>;
}
