pub mod memory;
pub mod timeout;

pub use memory::InMemoryRepository;
pub use timeout::TimeoutRepository;

pub use codeshare_core::{InsertOutcome, Repository, StorageError};
