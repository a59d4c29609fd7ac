// ============================================================
// EMPLOYEE IMPORT USE CASE
// ============================================================
// Orchestrate format detection, row decoding, normalization, and filtering

use tracing::{debug, info, warn};

use super::record_normalizer::normalize_rows;
use crate::domain::employee::{ParseResult, RawRow};
use crate::domain::error::{AppError, Result};
use crate::domain::import_config::ImportConfig;
use crate::infrastructure::spreadsheet::{decode_text, CsvRowReader, SourceFormat, WorkbookRowReader};
use crate::infrastructure::upload::UploadedFile;

/// Employee spreadsheet import use case
///
/// Holds only configuration, so one instance can serve concurrent uploads.
#[derive(Debug, Clone, Default)]
pub struct EmployeeImportUseCase {
    config: ImportConfig,
}

impl EmployeeImportUseCase {
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Parse an uploaded file into normalized employee records.
    ///
    /// The format is resolved from the file name before any content is read.
    /// An empty result is not an error; callers decide how to report it.
    pub async fn parse_file(&self, file: &dyn UploadedFile) -> Result<ParseResult> {
        let name = file.name().to_string();
        let format = self.resolve_format(&name)?;

        // Size is checked on the stored bytes, whatever the text encoding
        let bytes = file.bytes().await?;
        self.read_content(&name, format, &bytes)
    }

    /// Same pipeline for callers that already hold the file content
    pub fn parse_bytes(&self, name: &str, bytes: &[u8]) -> Result<ParseResult> {
        let format = self.resolve_format(name)?;
        self.read_content(name, format, bytes)
    }

    fn read_content(&self, name: &str, format: SourceFormat, bytes: &[u8]) -> Result<ParseResult> {
        self.check_size(bytes.len())?;

        let rows = if format.is_workbook() {
            WorkbookRowReader::new().read_rows(format, bytes)?
        } else {
            CsvRowReader::from_config(&self.config)?.read_rows(&decode_text(bytes))?
        };

        Ok(self.normalize(name, format, rows))
    }

    fn resolve_format(&self, name: &str) -> Result<SourceFormat> {
        let format = SourceFormat::from_file_name(name).map_err(|err| {
            warn!(file = %name, error = %err, "Rejected upload");
            err
        })?;

        self.config
            .validate()
            .map_err(|e| AppError::ConfigError(format!("Invalid import config: {}", e)))?;

        Ok(format)
    }

    fn check_size(&self, size: usize) -> Result<()> {
        let size = size as u64;
        if size > self.config.max_file_size_bytes {
            return Err(AppError::FileTooLarge {
                size,
                limit: self.config.max_file_size_bytes,
            });
        }
        Ok(())
    }

    fn normalize(&self, name: &str, format: SourceFormat, rows: Vec<RawRow>) -> ParseResult {
        let normalized = normalize_rows(&rows);

        for idx in &normalized.dropped {
            debug!(file = %name, row_index = idx, "Dropped row without identifying data");
        }

        info!(
            file = %name,
            format = %format,
            rows = rows.len(),
            kept = normalized.records.len(),
            dropped = normalized.dropped.len(),
            "Normalized employee upload"
        );

        normalized.records
    }
}
