use crate::domain::error::{AppError, Result};
use std::fmt;

/// Upload formats the importer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Xlsx,
    Xls,
    Csv,
}

impl SourceFormat {
    /// Resolve the format from the last extension of a file name
    pub fn from_file_name(name: &str) -> Result<Self> {
        let extension = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .ok_or_else(|| {
                AppError::UnsupportedFormat(format!("'{}' has no file extension", name))
            })?;

        match extension.as_str() {
            "xlsx" => Ok(SourceFormat::Xlsx),
            "xls" => Ok(SourceFormat::Xls),
            "csv" => Ok(SourceFormat::Csv),
            other => Err(AppError::UnsupportedFormat(format!(
                "'.{}' is not one of .xlsx, .xls, .csv",
                other
            ))),
        }
    }

    pub fn is_workbook(&self) -> bool {
        matches!(self, SourceFormat::Xlsx | SourceFormat::Xls)
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Xlsx => f.write_str("xlsx"),
            SourceFormat::Xls => f.write_str("xls"),
            SourceFormat::Csv => f.write_str("csv"),
        }
    }
}
