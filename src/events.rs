use serde::{Deserialize, Serialize};

/// An error event the host wants forwarded to Mattermost.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NotificationEvent {
    /// Event title, e.g. the exception type and message
    pub title: String,
    /// Code location blamed for the event, when the host could determine one
    pub culprit: Option<String>,
    /// Full display name of the project the event belongs to
    pub project: String,
    /// Project slug used to look up the plugin options
    pub project_slug: String,
    /// Absolute URL of the event in the host UI
    pub url: String,
}

impl NotificationEvent {
    pub fn new(
        title: impl Into<String>,
        project: impl Into<String>,
        project_slug: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            culprit: None,
            project: project.into(),
            project_slug: project_slug.into(),
            url: url.into(),
        }
    }

    pub fn with_culprit(mut self, culprit: impl Into<String>) -> Self {
        self.culprit = Some(culprit.into());
        self
    }

    /// `[<project>] <title>`, used as both attachment title and fallback text.
    pub fn headline(&self) -> String {
        format!("[{}] {}", self.project, self.title)
    }
}
