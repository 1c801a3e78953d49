use std::time::Duration;
use typed_builder::TypedBuilder;

pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 256 * 1024;
pub const DEFAULT_MAX_ID_ATTEMPTS: u32 = 5;
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Limits and timings for a [`ShareStore`](crate::ShareStore).
#[derive(Debug, Clone, TypedBuilder)]
pub struct StoreConfig {
    /// Upper bound on the byte length of `content` and of `stdin`, each.
    #[builder(default = DEFAULT_MAX_PAYLOAD_BYTES)]
    pub max_payload_bytes: usize,
    /// How many ids to try before giving up with `StorageExhausted`.
    #[builder(default = DEFAULT_MAX_ID_ATTEMPTS)]
    pub max_id_attempts: u32,
    #[builder(default = DEFAULT_SWEEP_INTERVAL)]
    pub sweep_interval: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
