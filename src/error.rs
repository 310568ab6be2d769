// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types with consistent user-facing messages.

use crate::validation::FieldErrors;

/// Client error type covering every failure a view or form can hit.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Network or transport failure before a response arrived.
    #[error("Network error: {0}")]
    Transport(String),

    /// Backend answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Backend answered 2xx with a body we could not decode.
    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Login required")]
    Unauthenticated,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ClientError {
    /// Build an HTTP error, preferring the server's own message.
    pub fn from_status(status: u16, server_message: Option<String>) -> Self {
        let message = server_message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        ClientError::Http { status, message }
    }

    /// Whether the backend rejected our credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Http { status, .. } if *status == 401 || *status == 403)
    }

    /// Whether the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Http { status: 404, .. })
    }

    /// Short message suitable for a transient notification.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Transport(_) => "Network error. Please check your connection.".to_string(),
            ClientError::Http { message, .. } => message.clone(),
            ClientError::Decode(_) => "The server sent an unexpected response.".to_string(),
            ClientError::Validation(_) => "Please ensure all fields are valid.".to_string(),
            ClientError::Unauthenticated => "Please log in to continue.".to_string(),
            ClientError::Internal(_) => "Something went wrong.".to_string(),
        }
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
