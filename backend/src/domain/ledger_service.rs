//! Balance ledger store for the mtnsyr tracker.
//!
//! Holds the in-memory dataset (employees, opening balance, per-employee
//! sales entries, derived totals, transaction history) and exposes read
//! access plus mutation and persistence operations. Every mutation runs the
//! derivation step before releasing the state lock, so derived fields are
//! consistent before any subsequent read.

use log::{debug, error, info};
use std::sync::{Arc, Mutex};

use shared::{
    CreditType, Employee, EmployeeTransaction, LedgerSnapshot, OpeningBalance, RemainingBalance,
    SalesByType, SalesEntry,
};

use crate::domain::seed;
use crate::storage::{Connection, SnapshotStorage};

/// The full in-memory dataset owned by the store.
#[derive(Debug, Clone, Default)]
struct LedgerState {
    employees: Vec<Employee>,
    opening_balance: OpeningBalance,
    sales_entries: Vec<SalesEntry>,
    sales_by_type: SalesByType,
    remaining_balances: RemainingBalance,
    transactions: Vec<EmployeeTransaction>,
}

/// Service owning the balance ledger state and its persistence
#[derive(Clone)]
pub struct LedgerService<C: Connection> {
    snapshot_repository: C::SnapshotRepository,
    state: Arc<Mutex<LedgerState>>,
}

impl<C: Connection> LedgerService<C> {
    /// Create a new store seeded with the fixed defaults
    pub fn new(connection: Arc<C>) -> Self {
        let snapshot_repository = connection.create_snapshot_repository();

        let mut state = LedgerState {
            employees: seed::default_employees(),
            opening_balance: seed::default_opening_balance(),
            transactions: seed::default_transactions(),
            ..LedgerState::default()
        };
        Self::provision_sales_entries(&mut state);
        Self::recalculate(&mut state);

        Self {
            snapshot_repository,
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Synthesize one zero-valued sales entry per employee, in employee
    /// order, when the employee set is non-empty and no entries exist yet.
    /// Guarded so it never overwrites entries that already exist.
    fn provision_sales_entries(state: &mut LedgerState) {
        if state.employees.is_empty() || !state.sales_entries.is_empty() {
            return;
        }

        state.sales_entries = state
            .employees
            .iter()
            .map(|employee| SalesEntry::zeroed(&employee.id))
            .collect();

        info!(
            "Provisioned {} zero-valued sales entries",
            state.sales_entries.len()
        );
    }

    /// Recompute sales-by-type as the field-wise sum over all sales
    /// entries, then remaining balances as opening balance minus the
    /// corresponding totals. Cash has no remaining concept. Idempotent.
    fn recalculate(state: &mut LedgerState) {
        let mut totals = SalesByType::default();
        for entry in &state.sales_entries {
            totals.syria_tel += entry.syria_tel;
            totals.mtn += entry.mtn;
            totals.cash += entry.cash;
        }

        state.remaining_balances = RemainingBalance {
            syria_tel: state.opening_balance.syria_tel - totals.syria_tel,
            mtn: state.opening_balance.mtn - totals.mtn,
        };
        state.sales_by_type = totals;
    }

    /// Manually invocable recomputation of the derived totals
    pub fn calculate_totals(&self) {
        let mut state = self.state.lock().unwrap();
        Self::recalculate(&mut state);
    }

    /// Replace the opening balance wholesale. No validation.
    pub fn set_opening_balance(&self, balance: OpeningBalance) {
        let mut state = self.state.lock().unwrap();
        state.opening_balance = balance;
        Self::recalculate(&mut state);

        info!(
            "Set opening balance: syriaTel={:.2}, mtn={:.2}",
            balance.syria_tel, balance.mtn
        );
    }

    /// Replace exactly the named field of the sales entry matching
    /// `employee_id`. Entries for other employees are unchanged. An
    /// unknown employee id is a silent no-op, not an error.
    pub fn update_sales_entry(&self, employee_id: &str, field: CreditType, value: f64) {
        let mut state = self.state.lock().unwrap();

        let matched = match state
            .sales_entries
            .iter_mut()
            .find(|entry| entry.employee_id == employee_id)
        {
            Some(entry) => {
                entry.set_amount(field, value);
                true
            }
            None => false,
        };

        if matched {
            Self::recalculate(&mut state);
            debug!("Updated sales entry for {}: {}={:.2}", employee_id, field, value);
        } else {
            debug!(
                "No sales entry for employee {}; ignoring {} update",
                employee_id, field
            );
        }
    }

    /// Replace the employee list wholesale. No validation, and no pruning
    /// of sales entries orphaned by a shrinking list.
    pub fn set_employees(&self, employees: Vec<Employee>) {
        let mut state = self.state.lock().unwrap();
        state.employees = employees;
        Self::provision_sales_entries(&mut state);
        Self::recalculate(&mut state);

        info!("Replaced employee list ({} employees)", state.employees.len());
    }

    /// Replace the transaction history wholesale. No validation.
    pub fn set_transactions(&self, transactions: Vec<EmployeeTransaction>) {
        let mut state = self.state.lock().unwrap();
        state.transactions = transactions;

        info!(
            "Replaced transaction history ({} transactions)",
            state.transactions.len()
        );
    }

    /// Append one generated transaction to the history log. The log does
    /// not participate in the totals derivation.
    pub fn add_transaction(
        &self,
        employee_id: &str,
        transaction_type: CreditType,
        amount: f64,
        description: &str,
    ) -> EmployeeTransaction {
        let transaction = EmployeeTransaction {
            id: EmployeeTransaction::generate_id(),
            employee_id: employee_id.to_string(),
            transaction_type,
            amount,
            date: shared::today_stamp(),
            description: description.to_string(),
        };

        let mut state = self.state.lock().unwrap();
        state.transactions.push(transaction.clone());

        info!(
            "Recorded {} transaction of {:.2} for employee {}",
            transaction_type, amount, employee_id
        );
        transaction
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.state.lock().unwrap().employees.clone()
    }

    pub fn opening_balance(&self) -> OpeningBalance {
        self.state.lock().unwrap().opening_balance
    }

    pub fn sales_entries(&self) -> Vec<SalesEntry> {
        self.state.lock().unwrap().sales_entries.clone()
    }

    pub fn sales_by_type(&self) -> SalesByType {
        self.state.lock().unwrap().sales_by_type
    }

    pub fn remaining_balances(&self) -> RemainingBalance {
        self.state.lock().unwrap().remaining_balances
    }

    pub fn transactions(&self) -> Vec<EmployeeTransaction> {
        self.state.lock().unwrap().transactions.clone()
    }

    /// Capture the current dataset as a persistable snapshot
    pub fn snapshot(&self) -> LedgerSnapshot {
        let state = self.state.lock().unwrap();
        LedgerSnapshot {
            opening_balance: state.opening_balance,
            sales_entries: state.sales_entries.clone(),
            remaining_balances: Some(state.remaining_balances),
            transactions: state.transactions.clone(),
            employees: Some(state.employees.clone()),
        }
    }

    /// Wholesale-replace the dataset from a snapshot in one step, then
    /// re-provision and recompute. Restored derived values are treated as a
    /// cache and re-validated by the recomputation.
    pub fn apply_snapshot(&self, snapshot: LedgerSnapshot) {
        let mut state = self.state.lock().unwrap();

        state.opening_balance = snapshot.opening_balance;
        state.sales_entries = snapshot.sales_entries;
        state.transactions = snapshot.transactions;
        if let Some(employees) = snapshot.employees {
            state.employees = employees;
        }
        if let Some(remaining) = snapshot.remaining_balances {
            state.remaining_balances = remaining;
        }

        Self::provision_sales_entries(&mut state);
        Self::recalculate(&mut state);
    }

    /// Persist the current dataset into the fixed-key storage slot.
    /// Failures are logged and swallowed; nothing surfaces to the caller.
    pub fn save_data(&self) {
        let snapshot = self.snapshot();
        match self.snapshot_repository.save_snapshot(&snapshot) {
            Ok(()) => debug!("Saved balance data"),
            Err(e) => error!("Failed to save balance data: {}", e),
        }
    }

    /// Restore the dataset from the storage slot. An absent slot is a
    /// no-op. The apply is atomic: the snapshot is staged in full before
    /// any state is touched, so a parse failure leaves state unmodified.
    /// Failures are logged and swallowed; callers cannot distinguish
    /// "nothing to load" from "load failed" beyond the log line.
    pub fn load_data(&self) {
        match self.snapshot_repository.load_snapshot() {
            Ok(Some(snapshot)) => {
                self.apply_snapshot(snapshot);
                info!("Loaded balance data from storage slot");
            }
            Ok(None) => debug!("No saved balance data found, keeping current state"),
            Err(e) => error!("Failed to load balance data: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonConnection;
    use tempfile::TempDir;

    fn create_test_service() -> (LedgerService<JsonConnection>, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection =
            Arc::new(JsonConnection::new(temp_dir.path()).expect("Failed to create connection"));
        (LedgerService::new(connection), temp_dir)
    }

    #[test]
    fn fresh_store_provisions_one_zero_entry_per_employee() {
        let (service, _temp_dir) = create_test_service();

        let employees = service.employees();
        let entries = service.sales_entries();

        assert_eq!(entries.len(), employees.len());
        for (employee, entry) in employees.iter().zip(entries.iter()) {
            assert_eq!(entry.employee_id, employee.id);
            assert_eq!(entry.syria_tel, 0.0);
            assert_eq!(entry.mtn, 0.0);
            assert_eq!(entry.cash, 0.0);
        }
    }

    #[test]
    fn provisioning_does_not_refire_over_existing_entries() {
        let (service, _temp_dir) = create_test_service();

        service.update_sales_entry("emp-001", CreditType::SyriaTel, 5000.0);

        // A wholesale employee replacement must not reset the entries that
        // already exist.
        service.set_employees(seed::default_employees());

        let entries = service.sales_entries();
        assert_eq!(entries[0].syria_tel, 5000.0);
    }

    #[test]
    fn totals_and_remaining_follow_the_worked_example() {
        let (service, _temp_dir) = create_test_service();

        service.set_opening_balance(OpeningBalance {
            syria_tel: 100000.0,
            mtn: 100000.0,
        });
        service.update_sales_entry("emp-001", CreditType::SyriaTel, 5000.0);
        service.update_sales_entry("emp-002", CreditType::Mtn, 3000.0);
        service.update_sales_entry("emp-002", CreditType::Cash, 1000.0);

        let totals = service.sales_by_type();
        assert_eq!(totals.syria_tel, 5000.0);
        assert_eq!(totals.mtn, 3000.0);
        assert_eq!(totals.cash, 1000.0);

        let remaining = service.remaining_balances();
        assert_eq!(remaining.syria_tel, 95000.0);
        assert_eq!(remaining.mtn, 97000.0);
    }

    #[test]
    fn update_touches_only_the_matching_entry() {
        let (service, _temp_dir) = create_test_service();
        let before = service.sales_entries();

        service.update_sales_entry("emp-002", CreditType::Mtn, 2500.0);

        let after = service.sales_entries();
        for (b, a) in before.iter().zip(after.iter()) {
            if a.employee_id == "emp-002" {
                assert_eq!(a.mtn, 2500.0);
                assert_eq!(a.syria_tel, b.syria_tel);
                assert_eq!(a.cash, b.cash);
            } else {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn update_for_unknown_employee_is_a_silent_noop() {
        let (service, _temp_dir) = create_test_service();
        let before = service.sales_entries();

        service.update_sales_entry("emp-999", CreditType::Cash, 9999.0);

        assert_eq!(service.sales_entries(), before);
    }

    #[test]
    fn set_opening_balance_recalculates_remaining() {
        let (service, _temp_dir) = create_test_service();
        service.update_sales_entry("emp-001", CreditType::SyriaTel, 10000.0);

        service.set_opening_balance(OpeningBalance {
            syria_tel: 50000.0,
            mtn: 80000.0,
        });

        let remaining = service.remaining_balances();
        assert_eq!(remaining.syria_tel, 40000.0);
        assert_eq!(remaining.mtn, 80000.0);
    }

    #[test]
    fn shrinking_employee_list_keeps_orphaned_entries() {
        let (service, _temp_dir) = create_test_service();
        let entries_before = service.sales_entries().len();

        let mut employees = seed::default_employees();
        employees.truncate(2);
        service.set_employees(employees);

        assert_eq!(service.sales_entries().len(), entries_before);
        assert_eq!(service.employees().len(), 2);
    }

    #[test]
    fn set_transactions_replaces_the_history_wholesale() {
        let (service, _temp_dir) = create_test_service();

        service.set_transactions(vec![EmployeeTransaction {
            id: "txn-only".to_string(),
            employee_id: "emp-001".to_string(),
            transaction_type: CreditType::Cash,
            amount: 100.0,
            date: "2024-02-01".to_string(),
            description: "Only entry".to_string(),
        }]);

        let transactions = service.transactions();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].id, "txn-only");
    }

    #[test]
    fn add_transaction_appends_without_touching_totals() {
        let (service, _temp_dir) = create_test_service();
        let totals_before = service.sales_by_type();
        let count_before = service.transactions().len();

        let recorded =
            service.add_transaction("emp-003", CreditType::SyriaTel, 750.0, "Evening sale");

        let transactions = service.transactions();
        assert_eq!(transactions.len(), count_before + 1);
        assert_eq!(transactions.last().unwrap(), &recorded);
        assert!(recorded.id.starts_with("txn-"));
        assert_eq!(service.sales_by_type(), totals_before);
    }

    #[test]
    fn calculate_totals_is_idempotent() {
        let (service, _temp_dir) = create_test_service();
        service.update_sales_entry("emp-001", CreditType::Mtn, 1234.0);

        let first = (service.sales_by_type(), service.remaining_balances());
        service.calculate_totals();
        service.calculate_totals();
        let second = (service.sales_by_type(), service.remaining_balances());

        assert_eq!(first, second);
    }

    #[test]
    fn save_then_load_restores_pre_save_state() {
        let (service, _temp_dir) = create_test_service();

        service.set_opening_balance(OpeningBalance {
            syria_tel: 60000.0,
            mtn: 70000.0,
        });
        service.update_sales_entry("emp-001", CreditType::SyriaTel, 5000.0);
        service.save_data();

        let saved_employees = service.employees();
        let saved_entries = service.sales_entries();
        let saved_transactions = service.transactions();
        let saved_opening = service.opening_balance();
        let saved_remaining = service.remaining_balances();

        // Diverge from the saved state, then restore.
        service.set_opening_balance(OpeningBalance {
            syria_tel: 1.0,
            mtn: 2.0,
        });
        service.update_sales_entry("emp-002", CreditType::Cash, 42.0);
        service.set_transactions(vec![]);

        service.load_data();

        assert_eq!(service.employees(), saved_employees);
        assert_eq!(service.sales_entries(), saved_entries);
        assert_eq!(service.transactions(), saved_transactions);
        assert_eq!(service.opening_balance(), saved_opening);
        assert_eq!(service.remaining_balances(), saved_remaining);
    }

    #[test]
    fn load_with_empty_slot_keeps_current_state() {
        let (service, _temp_dir) = create_test_service();
        service.update_sales_entry("emp-001", CreditType::Cash, 300.0);
        let before = service.sales_entries();

        service.load_data();

        assert_eq!(service.sales_entries(), before);
    }

    #[test]
    fn load_survives_a_corrupt_slot_without_mutating_state() {
        let (service, temp_dir) = create_test_service();
        service.update_sales_entry("emp-001", CreditType::Mtn, 800.0);
        let before = service.sales_entries();

        let slot_file = temp_dir.path().join("mtnsyr-balance-data.json");
        std::fs::write(&slot_file, "{ broken").unwrap();

        service.load_data();

        assert_eq!(service.sales_entries(), before);
    }

    #[test]
    fn snapshot_restores_through_apply_snapshot() {
        let (service, _temp_dir) = create_test_service();
        service.update_sales_entry("emp-004", CreditType::Cash, 150.0);
        let snapshot = service.snapshot();

        let (other, _other_dir) = create_test_service();
        other.apply_snapshot(snapshot.clone());

        assert_eq!(other.snapshot(), snapshot);
    }
}
