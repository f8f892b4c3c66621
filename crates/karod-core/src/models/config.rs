//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the karod pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KarodConfig {
    /// Table extraction configuration.
    pub tables: TableConfig,

    /// Metadata heuristics configuration.
    pub metadata: MetadataConfig,
}

/// Table extraction configuration.
///
/// The tolerance fields only affect the text-clustering fallback pass; the
/// ruled-grid pass needs no tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Minimum rows for a detection to count as a table. Single-row
    /// detections are header noise.
    pub min_rows: usize,

    /// Snap tolerance for clustering text into column/row boundaries.
    pub snap_tolerance: f64,

    /// Join tolerance for merging nearby boundary candidates.
    pub join_tolerance: f64,

    /// Minimum words stacked vertically to accept a column boundary.
    pub min_words_vertical: usize,

    /// Minimum words aligned horizontally to accept a row boundary.
    pub min_words_horizontal: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            min_rows: 2,
            snap_tolerance: 5.0,
            join_tolerance: 5.0,
            min_words_vertical: 2,
            min_words_horizontal: 1,
        }
    }
}

/// Metadata heuristics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    /// How many leading pages to scan for the entity name.
    pub entity_scan_pages: usize,

    /// How many leading pages to scan for the reporting period.
    pub period_scan_pages: usize,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            entity_scan_pages: 3,
            period_scan_pages: 5,
        }
    }
}

impl KarodConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
