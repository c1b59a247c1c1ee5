/// Shared test fixtures and utilities for test modules
#[allow(dead_code)]
pub mod fixtures {
    use reqwest::Url;
    use sentry_mattermost::NotificationEvent;
    use sentry_mattermost::configuration::ProjectOptions;
    use serde_json::Value;
    use wiremock::Request;

    pub const EVENT_URL: &str = "https://sentry.example/organizations/acme/issues/42/";

    /// The event used by the webhook format example
    pub fn null_pointer_event() -> NotificationEvent {
        NotificationEvent::new("NullPointerException", "My Project", "my-project", EVENT_URL)
            .with_culprit("views.py in handler")
    }

    /// Options with only the required webhook set
    pub fn minimal_options(webhook: &str) -> ProjectOptions {
        let mut options = ProjectOptions::new();
        options.insert("webhook".to_string(), webhook.to_string());
        options
    }

    /// Options with every field set, stored under the plugin's conf key
    pub fn complete_options(webhook: &str) -> ProjectOptions {
        let mut options = ProjectOptions::new();
        options.insert("mattermost:webhook".to_string(), format!("  {webhook}  "));
        options.insert("mattermost:username".to_string(), " Sentry Bot ".to_string());
        options.insert(
            "mattermost:icon_url".to_string(),
            "https://mm.example/icon.png".to_string(),
        );
        options.insert("mattermost:channel".to_string(), "#alerts".to_string());
        options
    }

    /// Decodes the `payload` form field of a webhook request
    pub fn form_payload(request: &Request) -> Option<Value> {
        let body = std::str::from_utf8(&request.body).ok()?;
        let url = Url::parse(&format!("http://form.local/?{body}")).ok()?;
        let (_, payload) = url.query_pairs().find(|(key, _)| key == "payload")?;
        serde_json::from_str(&payload).ok()
    }

    /// The raw `payload` form field of a webhook request
    pub fn form_payload_text(request: &Request) -> Option<String> {
        let body = std::str::from_utf8(&request.body).ok()?;
        let url = Url::parse(&format!("http://form.local/?{body}")).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == "payload")
            .map(|(_, payload)| payload.into_owned())
    }
}
