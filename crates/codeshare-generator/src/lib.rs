pub mod error;
pub mod random;
pub mod seq;

pub use error::GeneratorError;
pub use random::RandomGenerator;
pub use seq::SeqGenerator;

use codeshare_core::ShareId;

/// Trait for generating share ids.
///
/// Implementations are pure generators that don't interact with storage.
/// Resolving a collision with an existing live record is the store's job.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShareId>;
    /// Generates a fresh candidate id. Must not fail.
    fn generate(&self) -> Self::Output;
}
