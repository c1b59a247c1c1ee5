use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Key under which the host stores this plugin's per-project options.
pub const CONF_KEY: &str = "mattermost";

pub const WEBHOOK: &str = "webhook";
pub const USERNAME: &str = "username";
pub const ICON_URL: &str = "icon_url";
pub const CHANNEL: &str = "channel";

pub const DEFAULT_USERNAME: &str = "Sentry";
pub const DEFAULT_ICON_URL: &str = "http://myovchev.github.io/sentry-slack/images/logo32.png";

/// Raw option values for one project, as stored by the host.
pub type ProjectOptions = BTreeMap<String, String>;

/// Trimmed settings used to deliver one notification.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub webhook: String,
    pub username: String,
    pub icon_url: String,
    pub channel: String,
}

impl Config {
    pub fn new(webhook: impl Into<String>) -> Self {
        Self {
            webhook: webhook.into().trim().to_string(),
            username: DEFAULT_USERNAME.to_string(),
            ..Self::default()
        }
    }

    pub fn with_username(mut self, username: &str) -> Self {
        self.username = username.trim().to_string();
        self
    }

    pub fn with_icon_url(mut self, icon_url: &str) -> Self {
        self.icon_url = icon_url.trim().to_string();
        self
    }

    pub fn with_channel(mut self, channel: &str) -> Self {
        self.channel = channel.trim().to_string();
        self
    }

    /// Reads the four settings from a project's options.
    ///
    /// Keys may be bare (`webhook`) or prefixed with [`CONF_KEY`]
    /// (`mattermost:webhook`); the prefixed form wins. A missing username
    /// falls back to [`DEFAULT_USERNAME`], a blank one stays blank.
    pub fn from_options(options: &ProjectOptions) -> Self {
        let webhook = get_option(options, WEBHOOK).unwrap_or_default();
        let username = get_option(options, USERNAME).unwrap_or(DEFAULT_USERNAME);
        let icon_url = get_option(options, ICON_URL).unwrap_or_default();
        let channel = get_option(options, CHANNEL).unwrap_or_default();

        let config = Config {
            webhook: webhook.trim().to_string(),
            username: username.trim().to_string(),
            icon_url: icon_url.trim().to_string(),
            channel: channel.trim().to_string(),
        };

        debug!(
            configured = config.is_configured(),
            channel = %config.channel,
            "Loaded Mattermost options"
        );

        config
    }

    /// A notification is only attempted when a webhook URL is set.
    pub fn is_configured(&self) -> bool {
        !self.webhook.trim().is_empty()
    }
}

fn get_option<'a>(options: &'a ProjectOptions, name: &str) -> Option<&'a str> {
    options
        .get(&format!("{CONF_KEY}:{name}"))
        .or_else(|| options.get(name))
        .map(String::as_str)
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Url,
    String,
}

/// One entry of the plugin's settings form.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ConfigField {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    pub help: &'static str,
}

/// Settings exposed to the host's configuration UI.
pub fn config_fields() -> Vec<ConfigField> {
    vec![
        ConfigField {
            name: WEBHOOK,
            label: "Webhook URL",
            kind: FieldKind::Url,
            required: true,
            default: None,
            placeholder: None,
            help: "Your incoming webhook URL",
        },
        ConfigField {
            name: USERNAME,
            label: "Bot Name",
            kind: FieldKind::String,
            required: false,
            default: Some(DEFAULT_USERNAME),
            placeholder: None,
            help: "The name of the bot when posting messages.",
        },
        ConfigField {
            name: ICON_URL,
            label: "Icon URL",
            kind: FieldKind::Url,
            required: false,
            default: Some(DEFAULT_ICON_URL),
            placeholder: None,
            help: "The url of the icon to appear beside your bot (32px png). \
                   You may use http://myovchev.github.io/sentry-slack/images/logo32.png",
        },
        ConfigField {
            name: CHANNEL,
            label: "Destination",
            kind: FieldKind::String,
            required: false,
            default: None,
            placeholder: Some("e.g #notifications"),
            help: "Optional #channel name or @user. When sending to a @user, \
                   the message will be sent from the creator of the webhook",
        },
    ]
}
