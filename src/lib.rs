pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

#[cfg(test)]
mod test_support;

pub use crate::application::EmployeeImportUseCase;
pub use crate::domain::employee::{CanonicalField, NormalizedRecord, ParseResult, RawRow, RawValue};
pub use crate::domain::error::{AppError, Result};
pub use crate::domain::import_config::ImportConfig;
pub use crate::infrastructure::upload::{LocalUpload, MemoryUpload, UploadedFile};
pub use crate::interfaces::cli::{run, Cli};
