//! # API Shared
//!
//! Shared surface types for the medscore REST API.
//!
//! Contains:
//! - The uniform error envelope (`ErrorBody`) and its axum-aware
//!   counterpart (`ApiError`)
//! - The health check service and response type
//!
//! Every calculator endpoint, regardless of specialty, maps failures through
//! `ApiError` so API consumers can write one generic error handler.

pub mod envelope;
pub mod health;

pub use envelope::{ApiError, ErrorBody};
pub use health::{HealthRes, HealthService};
