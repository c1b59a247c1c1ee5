//! Mattermost incoming-webhook message body.

use crate::configuration::Config;
use crate::events::NotificationEvent;
use serde::Serialize;

const REFERRER: &str = "mattermost";

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Payload {
    pub attachments: Vec<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    pub fallback: String,
    pub title: String,
    pub title_link: String,
    pub fields: Vec<Field>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub title: String,
    pub value: String,
    pub short: bool,
}

/// Builds the webhook body for `event` using the project's `config`.
pub fn build_payload(event: &NotificationEvent, config: &Config) -> Payload {
    let headline = event.headline();

    let attachment = Attachment {
        fallback: headline.clone(),
        title: headline,
        title_link: title_link(&event.url),
        fields: vec![Field {
            title: "Culprit".to_string(),
            value: event.culprit.clone().unwrap_or_default(),
            short: false,
        }],
    };

    Payload {
        attachments: vec![attachment],
        username: non_empty(&config.username),
        channel: non_empty(&config.channel),
        icon_url: non_empty(&config.icon_url),
    }
}

/// Appends `referrer=mattermost` to the event URL, leaving the rest of it
/// byte-for-byte intact.
pub fn title_link(url: &str) -> String {
    let (base, fragment) = match url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (url, None),
    };

    let mut link = base.to_string();
    if !base.contains('?') {
        link.push('?');
    } else if !base.ends_with('?') && !base.ends_with('&') {
        link.push('&');
    }
    link.push_str("referrer=");
    link.push_str(REFERRER);

    if let Some(fragment) = fragment {
        link.push('#');
        link.push_str(fragment);
    }
    link
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
