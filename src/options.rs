use crate::configuration::ProjectOptions;
use crate::traits::ConfigProvider;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// In-memory implementation of ConfigProvider, keyed by project slug
#[derive(Debug, Default)]
pub struct ProjectOptionStore {
    projects: RwLock<HashMap<String, ProjectOptions>>,
}

impl ProjectOptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_option(&self, project: &str, key: &str, value: &str) {
        let mut projects = self.projects.write().unwrap_or_else(|e| e.into_inner());
        projects
            .entry(project.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    /// Replaces every option of `project`.
    pub fn set_options(&self, project: &str, options: ProjectOptions) {
        let mut projects = self.projects.write().unwrap_or_else(|e| e.into_inner());
        projects.insert(project.to_string(), options);
    }

    pub fn remove_project(&self, project: &str) -> Option<ProjectOptions> {
        let mut projects = self.projects.write().unwrap_or_else(|e| e.into_inner());
        projects.remove(project)
    }
}

#[async_trait]
impl ConfigProvider for ProjectOptionStore {
    async fn get_options(&self, project: &str) -> Result<ProjectOptions> {
        let projects = self
            .projects
            .read()
            .map_err(|_| anyhow!("Option store lock poisoned while reading project: {project}"))?;

        match projects.get(project) {
            Some(options) => Ok(options.clone()),
            None => {
                debug!("No options stored for project: {}", project);
                Ok(ProjectOptions::new())
            }
        }
    }
}
