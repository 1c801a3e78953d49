use crate::error::GeneratorError;
use crate::Generator;
use codeshare_core::ShareId;
use rand::{rng, Rng};

/// Lowercase base-36: digits then ASCII letters.
pub const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = codeshare_core::share_id::MAX_LENGTH;
pub const DEFAULT_LENGTH: usize = 10;

/// Produces ids by drawing characters uniformly from [`ALPHABET`].
///
/// Each character carries log2(36) ≈ 5.17 bits, so the default length of 10
/// gives about 51 bits and the minimum of 8 about 41 bits. Uses the
/// thread-local RNG, so concurrent callers never contend.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    length: usize,
}

impl RandomGenerator {
    pub fn new() -> Self {
        Self {
            length: DEFAULT_LENGTH,
        }
    }

    pub fn with_length(length: usize) -> Result<Self, GeneratorError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(GeneratorError::InvalidLength {
                length,
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            });
        }
        Ok(Self { length })
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for RandomGenerator {
    type Output = ShareId;

    fn generate(&self) -> ShareId {
        let mut rng = rng();
        let id: String = (0..self.length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        ShareId::new_unchecked(id)
    }
}
