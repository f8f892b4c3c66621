//! Materialized pages: text and grids already extracted by an external
//! engine, keyed by strategy.
//!
//! This is the wire format the CLI reads (a "page dump" JSON produced by
//! whatever rendered the source document) and the fixture type tests use.

use serde::{Deserialize, Serialize};

use super::{Grid, GridSettings, GridStrategy, PageGeometry, Result};

/// One page with pre-extracted text and grids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticPage {
    /// Plain extracted text.
    #[serde(default)]
    pub text: String,

    /// Grids found by ruling-line detection.
    #[serde(default)]
    pub lined: Vec<Grid>,

    /// Grids found by text clustering.
    #[serde(default)]
    pub clustered: Vec<Grid>,
}

impl StaticPage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lined: Vec::new(),
            clustered: Vec::new(),
        }
    }

    pub fn with_lined(mut self, grid: Grid) -> Self {
        self.lined.push(grid);
        self
    }

    pub fn with_clustered(mut self, grid: Grid) -> Self {
        self.clustered.push(grid);
        self
    }
}

impl PageGeometry for StaticPage {
    fn text(&self) -> &str {
        &self.text
    }

    fn grids(&self, settings: &GridSettings) -> Result<Vec<Grid>> {
        let grids = match settings.strategy {
            GridStrategy::Lines => &self.lined,
            GridStrategy::TextClusters => &self.clustered,
        };
        Ok(grids.clone())
    }
}

/// A whole document as materialized pages, in page order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticPageSet {
    /// Pages in document order (page 1 first).
    pub pages: Vec<StaticPage>,
}

impl StaticPageSet {
    /// Parse a page dump from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
