// ============================================================
// CSV ROW READER
// ============================================================
// Parse delimited text into raw rows keyed by the header line

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::domain::employee::{RawRow, RawValue};
use crate::domain::error::{AppError, Result};
use crate::domain::import_config::ImportConfig;

/// Delimited-text reader; the first line is always the header
pub struct CsvRowReader {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Fail on rows whose cell count differs from the header
    strict_columns: bool,
}

impl Default for CsvRowReader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            strict_columns: false,
        }
    }
}

impl CsvRowReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ImportConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| AppError::ConfigError(format!("Invalid import config: {}", e)))?;

        let delimiter = config.delimiter_byte().ok_or_else(|| {
            AppError::ConfigError("delimiter must be a single ASCII character".to_string())
        })?;

        Ok(Self::new()
            .with_delimiter(delimiter)
            .with_strict_columns(config.strict_columns))
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_strict_columns(mut self, strict: bool) -> Self {
        self.strict_columns = strict;
        self
    }

    /// Parse CSV content; blank lines produce no rows
    pub fn read_rows(&self, content: &str) -> Result<Vec<RawRow>> {
        // The csv crate closes an open quote at end of input without complaint
        if let Some(line) = self.unterminated_quote_line(content) {
            return Err(AppError::MalformedInput(format!(
                "unterminated quoted field starting on line {}",
                line
            )));
        }

        // Column-count checks happen below so whitespace-only lines can be skipped first
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::MalformedInput(format!("Failed to read CSV headers: {}", e)))?
            .clone();

        let mut rows = Vec::new();

        for result in reader.records() {
            let record = result.map_err(|e| {
                AppError::MalformedInput(format!("Failed to parse CSV row {}: {}", rows.len() + 1, e))
            })?;

            if Self::is_blank_line(&record) {
                continue;
            }

            if self.strict_columns && record.len() != headers.len() {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                return Err(AppError::MalformedInput(format!(
                    "CSV line {} has {} fields, header has {}",
                    line,
                    record.len(),
                    headers.len()
                )));
            }

            rows.push(Self::to_raw_row(&headers, &record));
        }

        Ok(rows)
    }

    /// Line where a quoted field opens but never closes.
    ///
    /// A quote only opens a field when it is the field's first byte; a doubled
    /// quote inside a quoted field is an escaped quote.
    fn unterminated_quote_line(&self, content: &str) -> Option<u64> {
        let bytes = content.as_bytes();
        let mut line: u64 = 1;
        let mut field_start = true;
        let mut open_since: Option<u64> = None;
        let mut i = 0;

        while i < bytes.len() {
            let b = bytes[i];

            if open_since.is_some() {
                if b == b'"' {
                    if bytes.get(i + 1) == Some(&b'"') {
                        i += 1;
                    } else {
                        open_since = None;
                        field_start = false;
                    }
                }
            } else if b == b'"' && field_start {
                open_since = Some(line);
            } else {
                field_start = b == self.delimiter || b == b'\n' || b == b'\r';
            }

            if b == b'\n' {
                line += 1;
            }
            i += 1;
        }

        open_since
    }

    /// A line holding only whitespace parses as one empty field
    fn is_blank_line(record: &StringRecord) -> bool {
        record.len() <= 1 && record.iter().all(|field| field.is_empty())
    }

    fn to_raw_row(headers: &StringRecord, record: &StringRecord) -> RawRow {
        let cells = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = match record.get(idx) {
                    Some(field) => RawValue::text(field),
                    None => RawValue::Blank,
                };
                (header.to_string(), value)
            })
            .collect();

        RawRow::new(cells)
    }
}
