//! Convenience result type alias for drivepath.

use crate::error::AppError;

/// A specialized `Result` type for drivepath operations.
pub type AppResult<T> = Result<T, AppError>;
