use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// An employee who sells credit and takes cash over the counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
}

/// The two credit types plus cash. Doubles as the transaction type on the
/// history log and as the field selector when updating a sales entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CreditType {
    SyriaTel,
    Mtn,
    Cash,
}

impl fmt::Display for CreditType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreditType::SyriaTel => write!(f, "syriaTel"),
            CreditType::Mtn => write!(f, "mtn"),
            CreditType::Cash => write!(f, "cash"),
        }
    }
}

/// Per-employee record of how much of each credit type (plus cash) was sold
/// during the tracked day. Exactly one entry exists per known employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesEntry {
    /// ID of the employee this entry belongs to
    pub employee_id: String,
    /// SyriaTel credit sold (a missing field in stored data reads as zero)
    #[serde(default)]
    pub syria_tel: f64,
    /// MTN credit sold
    #[serde(default)]
    pub mtn: f64,
    /// Cash taken
    #[serde(default)]
    pub cash: f64,
}

impl SalesEntry {
    /// A zero-valued entry for a freshly provisioned employee.
    pub fn zeroed(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            syria_tel: 0.0,
            mtn: 0.0,
            cash: 0.0,
        }
    }

    pub fn amount(&self, field: CreditType) -> f64 {
        match field {
            CreditType::SyriaTel => self.syria_tel,
            CreditType::Mtn => self.mtn,
            CreditType::Cash => self.cash,
        }
    }

    pub fn set_amount(&mut self, field: CreditType, value: f64) {
        match field {
            CreditType::SyriaTel => self.syria_tel = value,
            CreditType::Mtn => self.mtn = value,
            CreditType::Cash => self.cash = value,
        }
    }
}

/// The starting credit amount for each credit type at the start of a tracked
/// period. Cash has no opening balance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningBalance {
    pub syria_tel: f64,
    pub mtn: f64,
}

/// Derived field-wise sum of all sales entries. Never mutated directly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesByType {
    pub syria_tel: f64,
    pub mtn: f64,
    pub cash: f64,
}

/// Derived opening-balance-minus-sales totals, per credit type. Cash has no
/// remaining-balance counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemainingBalance {
    pub syria_tel: f64,
    pub mtn: f64,
}

/// A logged credit/cash movement tied to an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTransaction {
    pub id: String,
    /// ID of the employee this transaction belongs to
    pub employee_id: String,
    #[serde(rename = "type")]
    pub transaction_type: CreditType,
    pub amount: f64,
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    pub description: String,
}

impl EmployeeTransaction {
    /// Generate a unique transaction ID.
    /// Format: txn-<uuid-v4>
    pub fn generate_id() -> String {
        format!("txn-{}", Uuid::new_v4())
    }
}

/// The persisted storage-slot payload. One JSON object per fixed slot key,
/// overwrite semantics.
///
/// `employees` and `remainingBalances` are optional on the way in so that
/// older payloads without them still load; they are always written on the
/// way out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    pub opening_balance: OpeningBalance,
    pub sales_entries: Vec<SalesEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_balances: Option<RemainingBalance>,
    pub transactions: Vec<EmployeeTransaction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employees: Option<Vec<Employee>>,
}

/// The exported-file payload: the snapshot plus the export date and the
/// derived sales-by-type totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFile {
    /// Export date, YYYY-MM-DD
    pub date: String,
    pub opening_balance: OpeningBalance,
    pub sales_entries: Vec<SalesEntry>,
    pub remaining_balances: RemainingBalance,
    pub sales_by_type: SalesByType,
    pub transactions: Vec<EmployeeTransaction>,
    pub employees: Vec<Employee>,
}

/// Today's date in the YYYY-MM-DD form used for export stamps and filenames.
pub fn today_stamp() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Request to export the current dataset to a file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExportDataRequest {
    /// Optional filename override (without extension); a dated default is
    /// used when absent
    pub filename: Option<String>,
}

/// Response after an export attempt. Failures are reported here rather than
/// as errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDataResponse {
    pub success: bool,
    pub message: String,
    pub file_path: String,
    pub filename: String,
}
