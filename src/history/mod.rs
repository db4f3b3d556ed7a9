//! Calculation history: append-only snapshots behind injected storage

use crate::session::CalcSession;
use crate::tax::TaxCalculator;
use crate::traits::HistoryStorage;
use crate::types::*;

/// Manager for saved calculation snapshots
///
/// Owns a storage backend and nothing else; all tax math stays in the
/// calculator and session.
pub struct HistoryManager<S: HistoryStorage> {
    storage: S,
}

impl<S: HistoryStorage> HistoryManager<S> {
    /// Create a manager over the given storage backend
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Snapshot the session's current state and summary into history
    pub async fn record_snapshot(
        &mut self,
        session: &CalcSession,
        calculator: &TaxCalculator,
    ) -> CalcResult<HistoryRecord> {
        let summary = session.summarize(calculator);
        let record = HistoryRecord::new(
            session.income().clone(),
            session.expenses().to_vec(),
            session.fixed_expenses().to_vec(),
            summary,
        );
        self.storage.save_record(&record).await?;
        Ok(record)
    }

    /// Get a record by ID
    pub async fn get_record(&self, record_id: &str) -> CalcResult<Option<HistoryRecord>> {
        self.storage.get_record(record_id).await
    }

    /// Get a record by ID, returning an error if not found
    pub async fn get_record_required(&self, record_id: &str) -> CalcResult<HistoryRecord> {
        self.storage
            .get_record(record_id)
            .await?
            .ok_or_else(|| CalcError::RecordNotFound(record_id.to_string()))
    }

    /// List all records, newest first
    pub async fn list_records(&self) -> CalcResult<Vec<HistoryRecord>> {
        self.storage.list_records().await
    }

    /// Delete a single record
    pub async fn delete_record(&mut self, record_id: &str) -> CalcResult<()> {
        if self.storage.get_record(record_id).await?.is_none() {
            return Err(CalcError::RecordNotFound(record_id.to_string()));
        }
        self.storage.delete_record(record_id).await
    }

    /// Delete the entire history
    pub async fn clear(&mut self) -> CalcResult<()> {
        self.storage.clear_records().await
    }
}
