//! Core types and traits for the Codeshare snippet store.
//!
//! This crate provides the record model, the single expiry check, the clock
//! abstraction and the storage/service traits shared by the store and the
//! HTTP gateway.

pub mod clock;
pub mod error;
pub mod record;
pub mod repository;
pub mod service;
pub mod share_id;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{CoreError, ShareError, StorageError};
pub use record::{is_expired, ShareRecord};
pub use repository::{InsertOutcome, Repository};
pub use service::{CreateParams, Created, ShareService};
pub use share_id::ShareId;
