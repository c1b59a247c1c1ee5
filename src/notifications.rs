use crate::configuration::Config;
use crate::errors::NotifyError;
use crate::events::NotificationEvent;
use crate::payload::{Payload, build_payload};
use crate::traits::NotificationSender;
use async_trait::async_trait;
use reqwest::redirect::Policy;
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Delivers `event` to the webhook in `config` through `sender`.
///
/// Does nothing when no webhook is configured.
#[tracing::instrument(
    name = "notify",
    skip(event, config, sender),
    fields(
        notification_id = %Uuid::new_v4(),
        project = %event.project,
    )
)]
pub async fn notify(
    event: &NotificationEvent,
    config: &Config,
    sender: &dyn NotificationSender,
) -> Result<(), NotifyError> {
    if !config.is_configured() {
        debug!("No webhook configured, skipping notification");
        return Ok(());
    }

    let payload = build_payload(event, config);
    sender.send(&payload, config.webhook.trim()).await?;

    info!("Notification sent successfully");
    Ok(())
}

/// Pulls the `message` field out of a Mattermost error body.
pub fn error_message_from_json(data: &Value) -> Option<String> {
    match data.get("message") {
        Some(Value::String(message)) if !message.is_empty() => Some(message.clone()),
        _ => None,
    }
}

/// HTTP-based implementation of NotificationSender
#[derive(Clone, Debug)]
pub struct HttpNotificationSender {
    client: reqwest::Client,
}

impl HttpNotificationSender {
    /// Builds a sender whose client never follows redirects.
    pub fn new() -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder().redirect(Policy::none()).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl NotificationSender for HttpNotificationSender {
    #[tracing::instrument(name = "send", skip(self, payload, endpoint))]
    async fn send(&self, payload: &Payload, endpoint: &str) -> Result<(), NotifyError> {
        let body = serde_json::to_string(payload)?;

        let response = self
            .client
            .post(endpoint)
            .form(&[("payload", body.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|data| error_message_from_json(&data));

        warn!(status = %status, message = ?message, "Mattermost webhook request failed");

        Err(NotifyError::Api { status, message })
    }
}
