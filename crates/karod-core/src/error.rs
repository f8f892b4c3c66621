//! Error types for the karod-core library.

use thiserror::Error;

/// Main error type for the karod library.
#[derive(Error, Debug)]
pub enum KarodError {
    /// Page geometry backend error.
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors from the page-rendering/table-geometry backend.
///
/// These are the only recoverable failures inside the core: a broken source
/// document aborts extraction for that document alone. Everything else
/// (unparseable cells, missing tables, undetectable units) resolves to a
/// well-defined absent value instead of an error.
#[derive(Error, Debug)]
pub enum GeometryError {
    /// The backend could not read or interpret the source document.
    #[error("backend failure: {0}")]
    Backend(String),

    /// The document has no pages.
    #[error("document has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Result type for the karod library.
pub type Result<T> = std::result::Result<T, KarodError>;
