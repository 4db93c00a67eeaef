use super::{LikeStore, StoreError};
use crate::models::LikeRecord;
use async_trait::async_trait;
use dashmap::{DashMap, mapref::entry::Entry};
use std::sync::Arc;

/// In-process store backed by a `DashMap`, for local runs and tests.
#[derive(Clone, Default)]
pub struct MemoryStore {
    records: Arc<DashMap<String, LikeRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `records`.
    #[cfg(test)]
    pub fn with_records(records: impl IntoIterator<Item = LikeRecord>) -> Self {
        let store = Self::new();
        for record in records {
            store.records.insert(record.post_id.clone(), record);
        }
        store
    }

    pub fn get(&self, post_id: &str) -> Option<LikeRecord> {
        self.records.get(post_id).map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl LikeStore for MemoryStore {
    async fn find(&self, post_id: &str) -> Result<Option<LikeRecord>, StoreError> {
        Ok(self.get(post_id))
    }

    async fn insert(&self, record: &LikeRecord) -> Result<(), StoreError> {
        match self.records.entry(record.post_id.clone()) {
            Entry::Occupied(_) => Err(StoreError::Duplicate(record.post_id.clone())),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(())
            }
        }
    }

    async fn update_count(&self, post_id: &str, count: u64) -> Result<(), StoreError> {
        if let Some(mut record) = self.records.get_mut(post_id) {
            record.count = count;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_then_find() {
        let store = MemoryStore::new();
        store.insert(&LikeRecord::first_like("p1")).await.unwrap();

        let found = store.find("p1").await.unwrap();
        assert_eq!(found, Some(LikeRecord::first_like("p1")));
        assert_eq!(store.find("p2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let store = MemoryStore::with_records([LikeRecord::first_like("p1")]);

        let err = store
            .insert(&LikeRecord::first_like("p1"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(id) if id == "p1"));
    }

    #[tokio::test]
    async fn update_of_missing_record_is_noop() {
        let store = MemoryStore::new();
        store.update_count("ghost", 4).await.unwrap();
        assert!(store.get("ghost").is_none());
    }
}
