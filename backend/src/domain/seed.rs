//! Fixed defaults a fresh store is seeded with.

use shared::{CreditType, Employee, EmployeeTransaction, OpeningBalance};

/// Default opening balance for a new tracked period.
pub fn default_opening_balance() -> OpeningBalance {
    OpeningBalance {
        syria_tel: 100_000.0,
        mtn: 100_000.0,
    }
}

/// The fixed employee list a fresh store starts with.
pub fn default_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: "emp-001".to_string(),
            name: "Ahmad".to_string(),
        },
        Employee {
            id: "emp-002".to_string(),
            name: "Samer".to_string(),
        },
        Employee {
            id: "emp-003".to_string(),
            name: "Khaled".to_string(),
        },
        Employee {
            id: "emp-004".to_string(),
            name: "Huda".to_string(),
        },
    ]
}

/// The fixed transaction history a fresh store starts with.
pub fn default_transactions() -> Vec<EmployeeTransaction> {
    vec![
        EmployeeTransaction {
            id: "txn-seed-001".to_string(),
            employee_id: "emp-001".to_string(),
            transaction_type: CreditType::SyriaTel,
            amount: 5000.0,
            date: "2024-01-02".to_string(),
            description: "SyriaTel credit sale".to_string(),
        },
        EmployeeTransaction {
            id: "txn-seed-002".to_string(),
            employee_id: "emp-002".to_string(),
            transaction_type: CreditType::Mtn,
            amount: 3000.0,
            date: "2024-01-02".to_string(),
            description: "MTN credit sale".to_string(),
        },
        EmployeeTransaction {
            id: "txn-seed-003".to_string(),
            employee_id: "emp-003".to_string(),
            transaction_type: CreditType::Cash,
            amount: 1500.0,
            date: "2024-01-03".to_string(),
            description: "Cash payment".to_string(),
        },
    ]
}
