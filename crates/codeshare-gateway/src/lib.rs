//! HTTP boundary for the Codeshare share store.
//!
//! Exposes `POST /api/code` and `GET /api/code/{id}` over any
//! [`ShareService`](codeshare_core::ShareService), plus a health probe.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
