//! The Mattermost plugin as the host sees it.

use crate::configuration::{self, CONF_KEY, Config, ConfigField};
use crate::errors::NotifyError;
use crate::events::NotificationEvent;
use crate::notifications::{self, HttpNotificationSender};
use crate::registry::{
    FeatureDescription, IntegrationFeature, NotifyPlugin, PluginMetadata, ResourceLink,
};
use crate::traits::{ConfigProvider, NotificationSender};
use async_trait::async_trait;
use tracing::debug;

pub const SLUG: &str = "mattermost";
pub const TITLE: &str = "Mattermost";
pub const CONF_TITLE: &str = "Mattermost";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHOR: &str = "Copyleft Solutions";
pub const AUTHOR_URL: &str = "https://copyleft.no";
pub const DESCRIPTION: &str = "A Sentry plugin to send Mattermost notifications via webhooks.";
pub const REQUIRED_FIELD: &str = configuration::WEBHOOK;
pub const RESOURCE_LINKS: &[(&str, &str)] = &[
    (
        "Report Issue",
        "https://github.com/copyleft/sentry-mattermost/issues",
    ),
    (
        "View Source",
        "https://github.com/copyleft/sentry-mattermost/tree/master/sentry_mattermost",
    ),
];

pub struct MattermostPlugin<P, S> {
    provider: P,
    sender: S,
}

impl<P: ConfigProvider> MattermostPlugin<P, HttpNotificationSender> {
    /// Plugin delivering over HTTP with redirects disabled.
    pub fn with_provider(provider: P) -> Result<Self, NotifyError> {
        Ok(Self::new(provider, HttpNotificationSender::new()?))
    }
}

impl<P: ConfigProvider, S: NotificationSender> MattermostPlugin<P, S> {
    pub fn new(provider: P, sender: S) -> Self {
        Self { provider, sender }
    }

    pub fn conf_key(&self) -> &'static str {
        CONF_KEY
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Reads and trims the settings stored for `project`.
    pub async fn get_config(&self, project: &str) -> Result<Config, NotifyError> {
        let options = self.provider.get_options(project).await?;
        Ok(Config::from_options(&options))
    }
}

#[async_trait]
impl<P: ConfigProvider, S: NotificationSender> NotifyPlugin for MattermostPlugin<P, S> {
    fn slug(&self) -> &'static str {
        SLUG
    }

    fn title(&self) -> &'static str {
        TITLE
    }

    fn version(&self) -> &'static str {
        VERSION
    }

    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            slug: SLUG,
            title: TITLE,
            conf_title: CONF_TITLE,
            conf_key: CONF_KEY,
            version: VERSION,
            author: AUTHOR,
            author_url: AUTHOR_URL,
            description: DESCRIPTION,
            required_field: REQUIRED_FIELD,
            resource_links: RESOURCE_LINKS
                .iter()
                .map(|&(title, url)| ResourceLink { title, url })
                .collect(),
            feature_descriptions: vec![FeatureDescription {
                description: DESCRIPTION,
                feature: IntegrationFeature::AlertRule,
            }],
        }
    }

    fn config_fields(&self) -> Vec<ConfigField> {
        configuration::config_fields()
    }

    async fn is_configured(&self, project: &str) -> Result<bool, NotifyError> {
        Ok(self.get_config(project).await?.is_configured())
    }

    async fn notify(&self, event: &NotificationEvent) -> Result<(), NotifyError> {
        let config = self.get_config(&event.project_slug).await?;
        if !config.is_configured() {
            debug!("Plugin not configured for project: {}", &event.project_slug);
            return Ok(());
        }

        notifications::notify(event, &config, &self.sender).await
    }
}
