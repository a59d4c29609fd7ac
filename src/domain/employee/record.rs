// ============================================================
// NORMALIZED RECORD
// ============================================================
// Fixed-shape employee record sent to the record-creation endpoint

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    pub employee_id: String,
    pub employee_name: String,
    pub designation: String,
    pub email_id: String,
    pub account_number: String,
    pub salary: f64,
}

impl NormalizedRecord {
    /// True when at least one identifying field is populated
    pub fn has_identity(&self) -> bool {
        !self.employee_id.is_empty()
            || !self.employee_name.is_empty()
            || !self.account_number.is_empty()
            || !self.email_id.is_empty()
    }
}

/// Records in source row order
pub type ParseResult = Vec<NormalizedRecord>;
