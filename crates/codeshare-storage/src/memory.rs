use async_trait::async_trait;
use codeshare_core::repository::Result;
use codeshare_core::{is_expired, InsertOutcome, Repository, ShareId, ShareRecord};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use jiff::Timestamp;
use tracing::trace;

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap shards its locks, so operations on different ids proceed in
/// parallel while every check-then-act on a single id runs under that id's
/// shard lock. No method awaits while holding a guard.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    storage: DashMap<ShareId, ShareRecord>,
}

impl InMemoryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, record: ShareRecord, now: Timestamp) -> Result<InsertOutcome> {
        match self.storage.entry(record.id.clone()) {
            Entry::Occupied(mut occupied) => {
                if !is_expired(occupied.get(), now) {
                    return Ok(InsertOutcome::Occupied(record));
                }
                // The previous holder is logically gone; the new record starts fresh.
                trace!(id = %record.id, "replacing expired record");
                occupied.insert(record);
            }
            Entry::Vacant(vacant) => {
                vacant.insert(record);
            }
        }
        Ok(InsertOutcome::Inserted)
    }

    async fn fetch(&self, id: &ShareId, now: Timestamp) -> Result<Option<ShareRecord>> {
        let Entry::Occupied(mut occupied) = self.storage.entry(id.clone()) else {
            return Ok(None);
        };

        if is_expired(occupied.get(), now) {
            trace!(id = %id, "purging expired record on access");
            occupied.remove();
            return Ok(None);
        }

        let record = occupied.get_mut();
        record.views += 1;
        Ok(Some(record.clone()))
    }

    async fn sweep(&self, now: Timestamp) -> Result<usize> {
        let mut removed = 0;
        self.storage.retain(|_, record| {
            let keep = !is_expired(record, now);
            if !keep {
                removed += 1;
            }
            keep
        });
        Ok(removed)
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.storage.len())
    }
}
