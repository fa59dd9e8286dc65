use super::{Collection, RecordBuilder};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-memory collection; contents are lost when the server stops.
///
/// Reads share the lock; appends take it exclusively, which serializes id allocation across
/// concurrent requests.
pub struct MemoryCollection<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl<T> Collection<T> for MemoryCollection<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn append_with(&self, build: RecordBuilder<T>) -> T {
        let mut records = self.records.write().await;
        let id = records.len() as u64 + 1;
        let record = build(id);
        records.push(record.clone());
        record
    }

    async fn list_reversed(&self) -> Vec<T> {
        self.records.read().await.iter().rev().cloned().collect()
    }

    async fn find_by(&self, predicate: &(dyn for<'a> Fn(&'a T) -> bool + Sync)) -> Option<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| predicate(record))
            .cloned()
    }

    async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}
