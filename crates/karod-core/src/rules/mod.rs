//! Rule-based heuristics: numeral parsing, unit detection, metadata.
//!
//! Every heuristic here is an ordered list of rules evaluated in declared
//! sequence, kept as data rather than branching control flow so the
//! precedence policy stays auditable.

pub mod metadata;
pub mod numerals;
pub mod patterns;
pub mod units;

pub use metadata::extract_metadata;
pub use numerals::parse_number;
pub use units::detect_unit;
