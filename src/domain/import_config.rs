// ============================================================
// IMPORT CONFIGURATION
// ============================================================
// Limits and parsing switches for employee spreadsheet uploads

use serde::{Deserialize, Serialize};

/// Configuration for employee file imports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Largest accepted upload in bytes (default: 10MB)
    pub max_file_size_bytes: u64,

    /// Field delimiter for delimited text (default: ',')
    pub delimiter: char,

    /// Reject delimited rows whose cell count differs from the header
    /// instead of padding/truncating them (default: false)
    pub strict_columns: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 10 * 1024 * 1024,
            delimiter: ',',
            strict_columns: false,
        }
    }
}

impl ImportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delimiter as the byte the csv reader expects; `None` unless ASCII
    pub fn delimiter_byte(&self) -> Option<u8> {
        u8::try_from(self.delimiter).ok().filter(u8::is_ascii)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.max_file_size_bytes == 0 {
            return Err("max_file_size_bytes must be > 0".to_string());
        }
        if self.delimiter_byte().is_none() {
            return Err("delimiter must be a single ASCII character".to_string());
        }
        if matches!(self.delimiter, '"' | '\n' | '\r') {
            return Err("delimiter cannot be a quote or line break".to_string());
        }
        Ok(())
    }
}
