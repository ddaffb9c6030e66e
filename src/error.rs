// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with user-facing messages.

/// Application error type surfaced to the rendering layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Action is invalid in the current state, e.g. renting while a ride
    /// is already active, or double-booking a reservation slot.
    #[error("{0}")]
    Conflict(String),

    #[error("Please sign in!")]
    NotSignedIn,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Message suitable for an alert dialog. Storage and internal errors
    /// are logged and collapsed to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Storage(msg) => {
                tracing::error!(error = %msg, "Storage error");
                "Something went wrong, please try again".to_string()
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                "Something went wrong, please try again".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Result type alias for hook and service functions.
pub type Result<T> = std::result::Result<T, AppError>;
