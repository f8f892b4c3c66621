//! Core library for financial statement extraction.
//!
//! This crate provides:
//! - Structural table detection over a pluggable page-geometry backend
//!   (ruled-grid pass with a text-clustering fallback)
//! - Unit-of-measure inference from document prose (crores, lacs, millions,
//!   thousands, absolute rupees)
//! - Locale-aware numeral parsing (Indian grouping, parenthesized
//!   negatives, nil indicators)
//! - Conversion of table cells to the canonical crore unit
//! - Document metadata heuristics (entity name, reporting period)

pub mod convert;
pub mod error;
pub mod geometry;
pub mod models;
pub mod pipeline;
pub mod rules;
pub mod tables;

pub use convert::{convert_cell, convert_table};
pub use error::{GeometryError, KarodError, Result};
pub use geometry::{Grid, GridSettings, GridStrategy, PageGeometry, StaticPage, StaticPageSet};
pub use models::config::{KarodConfig, MetadataConfig, TableConfig};
pub use models::document::{
    DocumentExtract, DocumentMetadata, NormalizedTable, RawTable, Unit, UnitSpec,
};
pub use pipeline::process_document;
pub use rules::{detect_unit, extract_metadata, parse_number};
pub use tables::{extract_all_tables, extract_page_tables};
