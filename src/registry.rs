//! Extension point through which the host discovers notification plugins.

use crate::configuration::ConfigField;
use crate::errors::NotifyError;
use crate::events::NotificationEvent;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Host capabilities a plugin can take part in.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationFeature {
    AlertRule,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FeatureDescription {
    pub description: &'static str,
    pub feature: IntegrationFeature,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ResourceLink {
    pub title: &'static str,
    pub url: &'static str,
}

/// Static description of a plugin, rendered by the host's plugin listing.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PluginMetadata {
    pub slug: &'static str,
    pub title: &'static str,
    pub conf_title: &'static str,
    pub conf_key: &'static str,
    pub version: &'static str,
    pub author: &'static str,
    pub author_url: &'static str,
    pub description: &'static str,
    pub required_field: &'static str,
    pub resource_links: Vec<ResourceLink>,
    pub feature_descriptions: Vec<FeatureDescription>,
}

/// A plugin the host can hand events to
#[async_trait]
pub trait NotifyPlugin: Send + Sync {
    fn slug(&self) -> &'static str;

    fn title(&self) -> &'static str;

    fn version(&self) -> &'static str;

    fn metadata(&self) -> PluginMetadata;

    /// Settings the host should render for this plugin
    fn config_fields(&self) -> Vec<ConfigField>;

    /// Whether the plugin has enough settings to notify for `project`
    async fn is_configured(&self, project: &str) -> Result<bool, NotifyError>;

    /// Deliver one event
    async fn notify(&self, event: &NotificationEvent) -> Result<(), NotifyError>;
}

/// Plugins keyed by slug.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: BTreeMap<&'static str, Arc<dyn NotifyPlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `plugin`, replacing any plugin already registered under its slug.
    pub fn register(&mut self, plugin: Arc<dyn NotifyPlugin>) {
        let slug = plugin.slug();
        if self.plugins.insert(slug, plugin).is_some() {
            warn!("Replaced previously registered plugin: {}", slug);
        } else {
            info!("Registered plugin: {}", slug);
        }
    }

    pub fn get(&self, slug: &str) -> Option<Arc<dyn NotifyPlugin>> {
        self.plugins.get(slug).cloned()
    }

    pub fn slugs(&self) -> Vec<&'static str> {
        self.plugins.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Hands `event` to every plugin in slug order. One failure does not
    /// stop the others.
    pub async fn notify_all(
        &self,
        event: &NotificationEvent,
    ) -> Vec<(&'static str, Result<(), NotifyError>)> {
        let mut results = Vec::with_capacity(self.plugins.len());

        for (slug, plugin) in &self.plugins {
            let result = plugin.notify(event).await;
            if let Err(e) = &result {
                warn!(plugin = *slug, error = %e, "Failed to send notification");
            }
            results.push((*slug, result));
        }

        results
    }
}
