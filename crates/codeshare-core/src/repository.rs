use crate::error::StorageError;
use crate::record::ShareRecord;
use crate::share_id::ShareId;
use async_trait::async_trait;
use jiff::Timestamp;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Outcome of [`Repository::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The record is now live under its id.
    Inserted,
    /// A live record already holds the id; the rejected record is handed back.
    Occupied(ShareRecord),
}

/// Storage for share records.
///
/// Every method receives the caller's `now` so that all expiry decisions
/// within one store are made against a single clock. Implementations must
/// make each call atomic with respect to the id it touches.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Inserts `record` unless a live record already holds its id.
    /// An expired record under the same id is replaced.
    async fn insert(&self, record: ShareRecord, now: Timestamp) -> Result<InsertOutcome>;

    /// Returns the live record for `id` after incrementing its view count.
    /// Returns `None` if the id does not exist or has expired; an expired
    /// record is removed on the way out.
    async fn fetch(&self, id: &ShareId, now: Timestamp) -> Result<Option<ShareRecord>>;

    /// Removes every expired record and returns how many were removed.
    async fn sweep(&self, now: Timestamp) -> Result<usize>;

    /// Number of physically resident records, expired or not.
    async fn len(&self) -> Result<usize>;
}
