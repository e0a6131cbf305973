//! API types shared across handlers

pub mod error;

pub use error::{ApiError, ApiErrorResponse};
