//! Record storage.
//!
//! Installations and reports are kept in append-only collections behind the `Collection`
//! trait, so the in-memory implementation can be swapped for a persistent one without touching
//! the handlers. Ids are allocated inside the collection's write lock and equal the number of
//! previously stored records plus one.

mod memory;

pub use memory::MemoryCollection;

use async_trait::async_trait;
use common::model::installation::Installation;
use common::model::report::Report;
use std::sync::Arc;

/// Builds a record from the id allocated for it.
pub type RecordBuilder<T> = Box<dyn FnOnce(u64) -> T + Send>;

#[async_trait]
pub trait Collection<T>: Send + Sync
where
    T: Clone + Send + Sync + 'static,
{
    /// Allocates the next id, builds the record with it and appends it, all under one lock.
    async fn append_with(&self, build: RecordBuilder<T>) -> T;

    /// Every record, most recent first.
    async fn list_reversed(&self) -> Vec<T>;

    /// First record, in insertion order, that matches `predicate`.
    async fn find_by(&self, predicate: &(dyn for<'a> Fn(&'a T) -> bool + Sync)) -> Option<T>;

    async fn len(&self) -> usize;
}

/// The two collections the application works with.
#[derive(Clone)]
pub struct RecordStore {
    pub installations: Arc<dyn Collection<Installation>>,
    pub reports: Arc<dyn Collection<Report>>,
}

impl RecordStore {
    pub fn in_memory() -> Self {
        Self {
            installations: Arc::new(MemoryCollection::default()),
            reports: Arc::new(MemoryCollection::default()),
        }
    }

    pub async fn find_installation_by_uid(&self, uid: &str) -> Option<Installation> {
        self.installations
            .find_by(&|installation: &Installation| installation.uid == uid)
            .await
    }

    pub async fn find_report_by_id(&self, id: u64) -> Option<Report> {
        self.reports.find_by(&|report: &Report| report.id == id).await
    }
}
