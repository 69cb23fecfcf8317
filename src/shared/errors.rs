//! Error type shared by storage, the mock scan API and the store reducers.

use std::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected request data, e.g. an empty scan name.
    #[error("invalid request: {0}")]
    InvalidInput(String),

    /// Local storage missing, disabled or refusing the write.
    #[error("local storage: {0}")]
    Storage(String),

    #[error("scan service unavailable: {0}")]
    Unavailable(String),

    #[error("malformed stored data: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl AppError {
    /// Wrap a browser-side failure (usually a `JsValue`) as a storage error.
    pub fn storage(cause: impl Debug) -> Self {
        AppError::Storage(format!("{cause:?}"))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
