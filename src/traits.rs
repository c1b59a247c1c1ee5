use crate::configuration::ProjectOptions;
use crate::errors::NotifyError;
use crate::payload::Payload;
use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Trait for reading the plugin options stored by the host
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    /// Get the raw options for the given project
    async fn get_options(&self, project: &str) -> Result<ProjectOptions>;
}

/// Trait for delivering a payload to a webhook
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Send the payload to the given endpoint
    async fn send(&self, payload: &Payload, endpoint: &str) -> Result<(), NotifyError>;
}
