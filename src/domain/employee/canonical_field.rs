// ============================================================
// CANONICAL FIELDS
// ============================================================
// The closed set of attributes a normalized record carries

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalField {
    EmployeeId,
    EmployeeName,
    Designation,
    EmailId,
    AccountNumber,
    Salary,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 6] = [
        CanonicalField::EmployeeId,
        CanonicalField::EmployeeName,
        CanonicalField::Designation,
        CanonicalField::EmailId,
        CanonicalField::AccountNumber,
        CanonicalField::Salary,
    ];

    /// JSON key used by the record-creation endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::EmployeeId => "employeeId",
            CanonicalField::EmployeeName => "employeeName",
            CanonicalField::Designation => "designation",
            CanonicalField::EmailId => "emailId",
            CanonicalField::AccountNumber => "accountNumber",
            CanonicalField::Salary => "salary",
        }
    }

    /// Fields that make a row worth keeping
    pub fn is_identity(&self) -> bool {
        matches!(
            self,
            CanonicalField::EmployeeId
                | CanonicalField::EmployeeName
                | CanonicalField::EmailId
                | CanonicalField::AccountNumber
        )
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
