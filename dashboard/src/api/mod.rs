// File: dashboard/src/api/mod.rs
//! HTTP communication with the crawler admin API
//!
//! The backend owns jobs, schedules and their storage. The dashboard only
//! reads lists and sends create/update/delete requests:
//!
//! ```text
//! Form → typed request → AdminApiClient → /api/... → typed response → view model
//! ```
//!
//! # Error reporting
//!
//! The backend answers failures with `{"detail": "..."}`. That text is what
//! users see, so [`ApiError::Status`](crate::errors::ApiError::Status) carries
//! it verbatim, falling back to the raw body when it is not JSON.

pub mod client;

pub use client::AdminApiClient;
