// ============================================================
// EMPLOYEE DOMAIN LAYER
// ============================================================
// Core types for spreadsheet-to-record normalization
// No I/O, no async, no external dependencies beyond serde

mod canonical_field;
mod raw_row;
mod record;

pub use canonical_field::CanonicalField;
pub use raw_row::{RawRow, RawValue};
pub use record::{NormalizedRecord, ParseResult};
