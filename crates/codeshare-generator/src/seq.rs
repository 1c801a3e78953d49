use crate::Generator;
use codeshare_core::ShareId;
use std::sync::atomic::{AtomicU64, Ordering};

/// A deterministic id generator using a sequential counter.
///
/// Produces ids like "cs000000", "cs000001". Handy in tests where the
/// expected ids must be known up front; unsuitable for production because
/// the ids are guessable.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
    prefix: String,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
            prefix: self.prefix.clone(),
        }
    }
}

impl SeqGenerator {
    /// Creates a generator whose ids all start with `prefix`.
    ///
    /// The prefix is used verbatim, so it should only contain characters
    /// that are valid in a [`ShareId`].
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::with_offset(prefix, 0)
    }

    /// Creates a generator starting from a specific counter value.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
            prefix: prefix.into(),
        }
    }
}

impl Generator for SeqGenerator {
    type Output = ShareId;

    fn generate(&self) -> ShareId {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        ShareId::new_unchecked(format!("{}{:06}", self.prefix, count))
    }
}
