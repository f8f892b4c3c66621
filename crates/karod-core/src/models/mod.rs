//! Data models for extraction results and pipeline configuration.

pub mod config;
pub mod document;

pub use config::{KarodConfig, MetadataConfig, TableConfig};
pub use document::{
    DocumentExtract, DocumentMetadata, NormalizedTable, RawTable, Unit, UnitSpec,
};
