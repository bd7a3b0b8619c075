// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for ob-core operations.

use thiserror::Error;

/// All possible errors that can occur in ob-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("ticket not found: {0}")]
    TicketNotFound(String),

    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("User with ID \"{0}\" already exists")]
    UserExists(String),

    #[error("component not found: {0}")]
    ComponentNotFound(String),

    #[error("metric not found: {component}/{metric}")]
    MetricNotFound { component: String, metric: String },

    #[error("invalid status: '{0}'\n  hint: valid statuses are: Open, In Progress, Closed, Cancelled")]
    InvalidStatus(String),

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: Low, Medium, High, Critical")]
    InvalidPriority(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

impl Error {
    /// Returns true for lookups of an id that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::TicketNotFound(_)
                | Error::UserNotFound(_)
                | Error::ComponentNotFound(_)
                | Error::MetricNotFound { .. }
        )
    }

    /// Returns true for errors caused by the caller's input rather than storage.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::UserExists(_)
                | Error::InvalidStatus(_)
                | Error::InvalidPriority(_)
                | Error::InvalidInput(_)
        )
    }
}

/// A specialized Result type for ob-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
