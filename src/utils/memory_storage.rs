//! In-memory history storage for testing and development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::HistoryStorage;
use crate::types::*;

/// In-memory `HistoryStorage` implementation
///
/// Clones share the same underlying map, mirroring how a device key-value
/// store behaves across screens.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    records: Arc<RwLock<HashMap<String, HistoryRecord>>>,
}

impl MemoryStorage {
    /// Create a new memory storage instance
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    /// Whether the storage is empty
    pub fn is_empty(&self) -> bool {
        self.records.read().unwrap().is_empty()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryStorage for MemoryStorage {
    async fn save_record(&mut self, record: &HistoryRecord) -> CalcResult<()> {
        self.records
            .write()
            .unwrap()
            .insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn get_record(&self, record_id: &str) -> CalcResult<Option<HistoryRecord>> {
        Ok(self.records.read().unwrap().get(record_id).cloned())
    }

    async fn list_records(&self) -> CalcResult<Vec<HistoryRecord>> {
        let records = self.records.read().unwrap();
        let mut listed: Vec<HistoryRecord> = records.values().cloned().collect();
        listed.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(listed)
    }

    async fn delete_record(&mut self, record_id: &str) -> CalcResult<()> {
        if self.records.write().unwrap().remove(record_id).is_some() {
            Ok(())
        } else {
            Err(CalcError::RecordNotFound(record_id.to_string()))
        }
    }

    async fn clear_records(&mut self) -> CalcResult<()> {
        self.records.write().unwrap().clear();
        Ok(())
    }
}
