use async_trait::async_trait;
use codeshare_core::repository::Result;
use codeshare_core::{InsertOutcome, Repository, ShareId, ShareRecord, StorageError};
use jiff::Timestamp;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// A repository decorator that bounds every call to the inner repository.
///
/// A call that does not finish within the configured timeout is dropped
/// and reported as [`StorageError::Timeout`].
#[derive(Debug)]
pub struct TimeoutRepository<R> {
    inner: R,
    timeout: Duration,
}

impl<R: Repository> TimeoutRepository<R> {
    pub fn new(inner: R, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    async fn bounded<T>(
        &self,
        op: &'static str,
        fut: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    op,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "storage call timed out"
                );
                Err(StorageError::Timeout(format!(
                    "{} did not complete within {:?}",
                    op, self.timeout
                )))
            }
        }
    }
}

#[async_trait]
impl<R: Repository> Repository for TimeoutRepository<R> {
    async fn insert(&self, record: ShareRecord, now: Timestamp) -> Result<InsertOutcome> {
        self.bounded("insert", self.inner.insert(record, now)).await
    }

    async fn fetch(&self, id: &ShareId, now: Timestamp) -> Result<Option<ShareRecord>> {
        self.bounded("fetch", self.inner.fetch(id, now)).await
    }

    async fn sweep(&self, now: Timestamp) -> Result<usize> {
        self.bounded("sweep", self.inner.sweep(now)).await
    }

    async fn len(&self) -> Result<usize> {
        self.bounded("len", self.inner.len()).await
    }
}
