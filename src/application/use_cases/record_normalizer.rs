// ============================================================
// RECORD NORMALIZER
// ============================================================
// Build typed employee records from raw rows and drop rows
// without identifying data

use once_cell::sync::Lazy;
use regex::Regex;

use super::header_aliases::canonical_field;
use crate::domain::employee::{CanonicalField, NormalizedRecord, ParseResult, RawRow, RawValue};

static PLAIN_DECIMAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)$").unwrap());

/// Records kept from a batch of rows, plus the source indices that were dropped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedRows {
    pub records: ParseResult,
    pub dropped: Vec<usize>,
}

/// Salary cell to number; anything unparseable becomes 0
pub fn parse_salary(value: &RawValue) -> f64 {
    match value {
        RawValue::Number(n) => *n,
        RawValue::Blank => 0.0,
        other => {
            let cleaned: String = other
                .to_string()
                .chars()
                .filter(|c| *c != ',' && !c.is_whitespace())
                .collect();

            if PLAIN_DECIMAL_PATTERN.is_match(&cleaned) {
                cleaned.parse::<f64>().unwrap_or(0.0)
            } else {
                0.0
            }
        }
    }
}

fn cell_text(value: &RawValue) -> String {
    value.to_string().trim().to_string()
}

/// One record per row. Columns are applied in source order, so when two
/// headers map to the same field the rightmost column wins.
pub fn normalize_row(row: &RawRow) -> NormalizedRecord {
    let mut record = NormalizedRecord::default();

    for (header, value) in row.iter() {
        let Some(field) = canonical_field(header) else {
            continue;
        };

        match field {
            CanonicalField::EmployeeId => record.employee_id = cell_text(value),
            CanonicalField::EmployeeName => record.employee_name = cell_text(value),
            CanonicalField::Designation => record.designation = cell_text(value),
            CanonicalField::EmailId => record.email_id = cell_text(value),
            CanonicalField::AccountNumber => record.account_number = cell_text(value),
            CanonicalField::Salary => record.salary = parse_salary(value),
        }
    }

    record
}

/// Keep rule: any of employeeId, employeeName, accountNumber, emailId is set
pub fn keep_record(record: &NormalizedRecord) -> bool {
    record.has_identity()
}

pub fn normalize_rows(rows: &[RawRow]) -> NormalizedRows {
    let mut out = NormalizedRows::default();

    for (idx, row) in rows.iter().enumerate() {
        let record = normalize_row(row);
        if keep_record(&record) {
            out.records.push(record);
        } else {
            out.dropped.push(idx);
        }
    }

    out
}
