pub mod configuration;
pub mod errors;
pub mod events;
pub mod notifications;
pub mod options;
pub mod payload;
pub mod plugin;
pub mod registry;
pub mod telemetry;
pub mod traits;

pub use configuration::Config;
pub use errors::NotifyError;
pub use events::NotificationEvent;
pub use notifications::{HttpNotificationSender, notify};
pub use options::ProjectOptionStore;
pub use plugin::MattermostPlugin;
pub use registry::{NotifyPlugin, PluginMetadata, PluginRegistry};
