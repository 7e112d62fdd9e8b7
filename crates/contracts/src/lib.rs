//! Shared DTOs for the APK studio HTTP interface.
//!
//! Everything the frontend exchanges with the server lives here, so the
//! wire shapes stay in one place.

pub mod api;
pub mod project;

pub use api::ApiStatus;
pub use project::{ProjectStatus, ProjectSummary};
