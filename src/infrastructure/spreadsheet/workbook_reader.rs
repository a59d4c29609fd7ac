// ============================================================
// WORKBOOK ROW READER
// ============================================================
// Decode the first sheet of an .xlsx/.xls upload into raw rows

use std::io::Cursor;

use calamine::{Data, Range, Reader, Xls, Xlsx};
use tracing::debug;

use super::SourceFormat;
use crate::domain::employee::{RawRow, RawValue};
use crate::domain::error::{AppError, Result};

/// Reads workbook bytes already held in memory
#[derive(Debug, Default, Clone, Copy)]
pub struct WorkbookRowReader;

impl WorkbookRowReader {
    pub fn new() -> Self {
        Self
    }

    /// First sheet by position; the first row of its used range is the header
    pub fn read_rows(&self, format: SourceFormat, bytes: &[u8]) -> Result<Vec<RawRow>> {
        let range = match format {
            SourceFormat::Xlsx => Self::first_sheet::<Xlsx<Cursor<&[u8]>>>(bytes)?,
            SourceFormat::Xls => Self::first_sheet::<Xls<Cursor<&[u8]>>>(bytes)?,
            SourceFormat::Csv => {
                return Err(AppError::UnsupportedFormat(
                    "csv content cannot be read as a workbook".to_string(),
                ))
            }
        };

        debug!(
            format = %format,
            height = range.height(),
            width = range.width(),
            "Loaded first worksheet"
        );

        Ok(Self::rows_from_range(&range))
    }

    fn first_sheet<'a, R>(bytes: &'a [u8]) -> Result<Range<Data>>
    where
        R: Reader<Cursor<&'a [u8]>>,
        R::Error: std::fmt::Display,
    {
        let mut workbook = R::new(Cursor::new(bytes))
            .map_err(|e| AppError::MalformedInput(format!("Failed to open workbook: {}", e)))?;

        workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AppError::MalformedInput("No worksheet found in workbook".to_string()))?
            .map_err(|e| AppError::MalformedInput(format!("Failed to read worksheet: {}", e)))
    }

    fn rows_from_range(range: &Range<Data>) -> Vec<RawRow> {
        let mut rows = range.rows();

        let headers: Vec<String> = match rows.next() {
            Some(header_row) => header_row
                .iter()
                .map(|cell| Self::to_raw_value(cell).to_string().trim().to_string())
                .collect(),
            None => return Vec::new(),
        };

        rows.map(|row| {
            let cells = headers
                .iter()
                .enumerate()
                .map(|(idx, header)| {
                    let value = row
                        .get(idx)
                        .map(Self::to_raw_value)
                        .unwrap_or(RawValue::Blank);
                    (header.clone(), value)
                })
                .collect();
            RawRow::new(cells)
        })
        .collect()
    }

    fn to_raw_value(cell: &Data) -> RawValue {
        match cell {
            Data::Empty => RawValue::Blank,
            Data::String(s) => RawValue::Text(s.clone()),
            Data::Float(f) => RawValue::Number(*f),
            Data::Int(i) => RawValue::Number(*i as f64),
            Data::Bool(b) => RawValue::Bool(*b),
            // Dates, durations and cell errors keep their display text
            other => RawValue::Text(other.to_string()),
        }
    }
}
