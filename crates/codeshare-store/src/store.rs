use crate::config::StoreConfig;
use async_trait::async_trait;
use codeshare_core::error::Result;
use codeshare_core::{
    Clock, CreateParams, Created, InsertOutcome, Repository, ShareError, ShareId, ShareRecord,
    ShareService, SystemClock,
};
use codeshare_generator::Generator;
use jiff::{SignedDuration, Timestamp};
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// A concrete implementation of the `ShareService` trait.
///
/// This store wraps a `Repository`, a `Generator` and a `Clock` to handle:
/// - Payload and TTL validation
/// - Id generation with bounded retry on collision
/// - View-counted fetches with expiry enforcement
/// - Eviction of expired records
///
/// Cloning is cheap and every clone operates on the same records.
#[derive(Debug)]
pub struct ShareStore<R, G, C = SystemClock> {
    repository: Arc<R>,
    generator: Arc<G>,
    clock: Arc<C>,
    config: StoreConfig,
}

impl<R, G, C> Clone for ShareStore<R, G, C> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
            clock: Arc::clone(&self.clock),
            config: self.config.clone(),
        }
    }
}

impl<R: Repository, G: Generator> ShareStore<R, G, SystemClock> {
    /// Creates a store that reads the system clock.
    pub fn new(repository: R, generator: G, config: StoreConfig) -> Self {
        Self::with_clock(repository, generator, SystemClock, config)
    }
}

impl<R: Repository, G: Generator, C: Clock> ShareStore<R, G, C> {
    pub fn with_clock(repository: R, generator: G, clock: C, config: StoreConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            clock: Arc::new(clock),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    fn check_payload(&self, field: &'static str, value: &str) -> Result<()> {
        let limit = self.config.max_payload_bytes;
        if value.len() > limit {
            return Err(ShareError::PayloadTooLarge {
                field,
                size: value.len(),
                limit,
            });
        }
        Ok(())
    }

    /// Converts an optional TTL into an absolute deadline.
    fn expiry(now: Timestamp, ttl: Option<SignedDuration>) -> Result<Option<Timestamp>> {
        let Some(ttl) = ttl else {
            return Ok(None);
        };
        if !ttl.is_positive() {
            return Err(ShareError::InvalidArgument(format!(
                "ttl must be positive, got {ttl:#}"
            )));
        }
        now.checked_add(ttl)
            .map(Some)
            .map_err(|e| ShareError::InvalidArgument(format!("ttl is out of range: {e}")))
    }
}

#[async_trait]
impl<R: Repository, G: Generator, C: Clock> ShareService for ShareStore<R, G, C> {
    async fn create(&self, params: CreateParams) -> Result<Created> {
        self.check_payload("code", &params.content)?;
        self.check_payload("input", &params.stdin)?;
        self.check_payload("fileName", &params.display_name)?;

        let now = self.clock.now();
        let expires_at = Self::expiry(now, params.ttl)?;
        let allow_edit = params.allow_edit;

        let mut record = ShareRecord {
            id: self.generator.generate().into(),
            content: params.content,
            stdin: params.stdin,
            display_name: params.display_name,
            created_at: now,
            expires_at,
            is_public: params.is_public,
            allow_edit,
            views: 0,
        };

        let attempts = self.config.max_id_attempts.max(1);
        for attempt in 1..=attempts {
            if attempt > 1 {
                record.id = self.generator.generate().into();
            }
            let id = record.id.clone();
            match self.repository.insert(record, now).await? {
                InsertOutcome::Inserted => {
                    info!(id = %id, attempt, ?expires_at, allow_edit, "created share");
                    return Ok(Created { id, allow_edit });
                }
                InsertOutcome::Occupied(rejected) => {
                    warn!(id = %rejected.id, attempt, "generated id is taken, regenerating");
                    record = rejected;
                }
            }
        }

        Err(ShareError::StorageExhausted { attempts })
    }

    async fn fetch(&self, id: &ShareId) -> Result<ShareRecord> {
        let now = self.clock.now();
        match self.repository.fetch(id, now).await? {
            Some(record) => {
                debug!(id = %id, views = record.views, "fetched share");
                Ok(record)
            }
            None => {
                trace!(id = %id, "share not found or expired");
                Err(ShareError::NotFound(id.to_string()))
            }
        }
    }

    async fn sweep(&self) -> Result<usize> {
        let now = self.clock.now();
        let removed = self.repository.sweep(now).await?;
        if removed > 0 {
            info!(removed, "swept expired shares");
        }
        Ok(removed)
    }
}
