//! The share store: creation, view-counted retrieval and expiry of shared
//! snippets.
//!
//! [`ShareStore`] ties a [`Repository`](codeshare_core::Repository), a
//! [`Generator`](codeshare_generator::Generator) and a
//! [`Clock`](codeshare_core::Clock) together. [`Sweeper`] runs the periodic
//! eviction pass for any [`ShareService`](codeshare_core::ShareService).

pub mod config;
pub mod store;
pub mod sweeper;

pub use config::StoreConfig;
pub use store::ShareStore;
pub use sweeper::Sweeper;
