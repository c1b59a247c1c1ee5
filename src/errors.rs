//! Error types for delivering notifications.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when notifying a Mattermost webhook.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Transport failure (DNS, refused connection, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The webhook answered with a non-2xx status
    #[error("Mattermost returned {status}{}", detail(.message))]
    Api {
        status: StatusCode,
        message: Option<String>,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The configuration provider failed to return project options
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),
}

fn detail(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl NotifyError {
    /// Human readable detail extracted from the webhook response, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            NotifyError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
