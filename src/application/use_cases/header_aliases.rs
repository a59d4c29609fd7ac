// Header alias configuration for employee uploads.
//
// Spreadsheets arrive with whatever column names the HR export used; every
// spelling collapses to a normalized key and is looked up exactly.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::employee::CanonicalField;

// NOTE:
// - Keys are post-normalization: lowercase ASCII letters and digits only.
// - "Employee_ID", "EMPLOYEE ID" and "employeeId" all become "employeeid".
// - Exact match only. "Email" alone is not an alias of emailId.
pub const HEADER_ALIASES: &[(&str, CanonicalField)] = &[
    ("employeeid", CanonicalField::EmployeeId),
    ("empid", CanonicalField::EmployeeId),
    ("id", CanonicalField::EmployeeId),
    ("employeename", CanonicalField::EmployeeName),
    ("name", CanonicalField::EmployeeName),
    ("designation", CanonicalField::Designation),
    ("role", CanonicalField::Designation),
    ("jobtitle", CanonicalField::Designation),
    ("emailid", CanonicalField::EmailId),
    ("accountnumber", CanonicalField::AccountNumber),
    ("accountno", CanonicalField::AccountNumber),
    ("iban", CanonicalField::AccountNumber),
    ("salary", CanonicalField::Salary),
    ("basepay", CanonicalField::Salary),
    ("grosssalary", CanonicalField::Salary),
];

static ALIAS_LOOKUP: Lazy<HashMap<&'static str, CanonicalField>> =
    Lazy::new(|| HEADER_ALIASES.iter().copied().collect());

/// Lowercase and drop every character that is not an ASCII letter or digit
pub fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Resolve a header as spelled in the file; `None` means the column is ignored
pub fn canonical_field(header: &str) -> Option<CanonicalField> {
    ALIAS_LOOKUP.get(normalize_header(header).as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("Employee_ID"), "employeeid");
        assert_eq!(normalize_header("  Account No. "), "accountno");
        assert_eq!(normalize_header("E-mail ID"), "emailid");
        assert_eq!(normalize_header("Gross\tSalary (PKR)"), "grosssalarypkr");
        assert_eq!(normalize_header("Émployé"), "mploy");
    }

    #[test]
    fn test_employee_id_spellings() {
        for header in ["Employee_ID", "EMPLOYEE ID", "employeeid", "employeeId", "Emp ID", "ID"] {
            assert_eq!(
                canonical_field(header),
                Some(CanonicalField::EmployeeId),
                "{}",
                header
            );
        }
    }

    #[test]
    fn test_documented_spellings() {
        let cases = [
            ("Employee Name", CanonicalField::EmployeeName),
            ("employee_name", CanonicalField::EmployeeName),
            ("Name", CanonicalField::EmployeeName),
            ("Designation", CanonicalField::Designation),
            ("Role", CanonicalField::Designation),
            ("Job Title", CanonicalField::Designation),
            ("job_title", CanonicalField::Designation),
            ("Email ID", CanonicalField::EmailId),
            ("email_id", CanonicalField::EmailId),
            ("Account Number", CanonicalField::AccountNumber),
            ("Account No", CanonicalField::AccountNumber),
            ("account_no.", CanonicalField::AccountNumber),
            ("IBAN", CanonicalField::AccountNumber),
            ("Salary", CanonicalField::Salary),
            ("Base Pay", CanonicalField::Salary),
            ("Gross-Salary", CanonicalField::Salary),
        ];

        for (header, expected) in cases {
            assert_eq!(canonical_field(header), Some(expected), "{}", header);
        }
    }

    #[test]
    fn test_unmapped_headers() {
        for header in ["Email", "Department", "Salary Grade", "", "   ", "Name 2"] {
            assert_eq!(canonical_field(header), None, "{}", header);
        }
    }

    #[test]
    fn test_table_keys_are_normalized_and_unique() {
        let mut seen = HashSet::new();
        for (key, _) in HEADER_ALIASES {
            assert_eq!(normalize_header(key), *key);
            assert!(seen.insert(*key), "duplicate alias {}", key);
        }
        assert_eq!(ALIAS_LOOKUP.len(), HEADER_ALIASES.len());
    }
}
