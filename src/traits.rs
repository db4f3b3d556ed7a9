//! Traits for storage abstraction and extensibility

use async_trait::async_trait;

use crate::types::*;

/// Storage abstraction for calculation history
///
/// The calculator itself never touches storage; history snapshots are
/// persisted through this trait so any backend (device key-value store,
/// SQLite, in-memory) can be injected. Records serialize to JSON via serde.
#[async_trait]
pub trait HistoryStorage: Send + Sync {
    /// Append a history record
    async fn save_record(&mut self, record: &HistoryRecord) -> CalcResult<()>;

    /// Get a record by ID
    async fn get_record(&self, record_id: &str) -> CalcResult<Option<HistoryRecord>>;

    /// List all records, newest first
    async fn list_records(&self) -> CalcResult<Vec<HistoryRecord>>;

    /// Delete a single record
    async fn delete_record(&mut self, record_id: &str) -> CalcResult<()>;

    /// Delete every record
    async fn clear_records(&mut self) -> CalcResult<()>;
}

/// Trait for implementing custom expense validation rules
pub trait ExpenseValidator: Send + Sync {
    /// Validate a session expense before it enters the working set
    fn validate_expense(&self, expense: &Expense) -> CalcResult<()>;

    /// Validate a fixed expense before it enters the working set
    fn validate_fixed_expense(&self, fixed_expense: &FixedExpense) -> CalcResult<()>;
}

/// Default expense validator with basic rules
pub struct DefaultExpenseValidator;

impl ExpenseValidator for DefaultExpenseValidator {
    fn validate_expense(&self, expense: &Expense) -> CalcResult<()> {
        if expense.name.trim().is_empty() {
            return Err(CalcError::Validation(
                "Expense name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_fixed_expense(&self, fixed_expense: &FixedExpense) -> CalcResult<()> {
        if fixed_expense.name.trim().is_empty() {
            return Err(CalcError::Validation(
                "Fixed expense name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
