//! Project manager - create, save, publish and delete projects through the
//! REST API and turn each outcome into a notification.
//!
//! Every call is independent: no retry, no de-duplication of in-flight
//! requests. Failures never propagate; they become an error toast and a log
//! line.

mod api;
mod error;

pub use api::*;
pub use error::*;

use crate::notifications::{Toast, ToastManager};
use crate::settings::EditorSettings;
use serde_json::{Map, Value};
use std::time::Duration;

const CREATED: &str = "Project created!";
const CREATE_FAILED: &str = "Failed to create project, please retry.";
const CREATE_NETWORK: &str = "Network error, please check your connection.";
const SAVED: &str = "Project saved";
const SAVE_FAILED: &str = "Save failed, please retry";
const SAVE_NETWORK: &str = "Save failed: network error";
const PUBLISHED: &str = "Project published!";
const PUBLISH_FAILED: &str = "Publish failed, please retry";
const PUBLISH_NETWORK: &str = "Publish failed: network error";
const DELETED: &str = "Project deleted";
const DELETE_FAILED: &str = "Delete failed, please retry";
const DELETE_NETWORK: &str = "Delete failed: network error";

/// Question asked before a project is deleted
pub const DELETE_CONFIRMATION: &str = "Delete this project? This cannot be undone.";

/// What the host should do after a project call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectOutcome {
    /// Nothing beyond the notification
    Stay,
    /// Go to another page of the app
    Navigate(String),
    /// Open a URL in a new window
    OpenWindow(String),
    /// Reload the current page
    Reload,
}

pub struct ProjectManager<A: ProjectApi> {
    api: A,
    toasts: ToastManager,
}

impl ProjectManager<HttpProjectApi> {
    /// Manager talking to the configured API, with the configured
    /// notification lifetime.
    pub fn from_settings(settings: &EditorSettings) -> ProjectResult<Self> {
        let api = HttpProjectApi::from_settings(settings)?;
        tracing::debug!(base_url = api.base_url(), "project manager configured");
        Ok(Self::new(api).with_notification_duration(settings.notification_duration()))
    }
}

impl<A: ProjectApi> ProjectManager<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            toasts: ToastManager::new(),
        }
    }

    /// Notifications stay up for `duration` instead of the default
    pub fn with_notification_duration(mut self, duration: Duration) -> Self {
        self.toasts = ToastManager::with_duration(duration);
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastManager {
        &mut self.toasts
    }

    /// Create a project from arbitrary fields and open it in the editor.
    pub fn create_project(&mut self, fields: Map<String, Value>) -> ProjectOutcome {
        match self.api.create_project(&fields) {
            Ok(response) if response.success => {
                self.toasts.push(Toast::success(CREATED));
                match response.project_id {
                    Some(id) => {
                        tracing::info!(id, "project created");
                        ProjectOutcome::Navigate(format!("/editor/{id}"))
                    }
                    None => {
                        tracing::warn!("project created without an id");
                        ProjectOutcome::Stay
                    }
                }
            }
            Ok(_) => {
                self.toasts.push(Toast::error(CREATE_FAILED));
                ProjectOutcome::Stay
            }
            Err(e) => {
                tracing::error!(error = %e, "error creating project");
                self.toasts.push(Toast::error(CREATE_NETWORK));
                ProjectOutcome::Stay
            }
        }
    }

    /// Save editor content for a project.
    pub fn save_project(&mut self, id: ProjectId, content: Value) -> ProjectOutcome {
        let request = SaveProjectRequest { content };
        match self.api.save_project(id, &request) {
            Ok(response) if response.success => {
                tracing::info!(id, "project saved");
                self.toasts.push(Toast::success(SAVED));
            }
            Ok(_) => {
                self.toasts.push(Toast::error(SAVE_FAILED));
            }
            Err(e) => {
                tracing::error!(id, error = %e, "error saving project");
                self.toasts.push(Toast::error(SAVE_NETWORK));
            }
        }
        ProjectOutcome::Stay
    }

    /// Publish a project and open its public URL.
    pub fn publish_project(&mut self, id: ProjectId) -> ProjectOutcome {
        match self.api.publish_project(id) {
            Ok(response) if response.success => {
                tracing::info!(id, url = ?response.url, "project published");
                self.toasts.push(Toast::success(PUBLISHED));
                response
                    .url
                    .map(ProjectOutcome::OpenWindow)
                    .unwrap_or(ProjectOutcome::Stay)
            }
            Ok(_) => {
                self.toasts.push(Toast::error(PUBLISH_FAILED));
                ProjectOutcome::Stay
            }
            Err(e) => {
                tracing::error!(id, error = %e, "error publishing project");
                self.toasts.push(Toast::error(PUBLISH_NETWORK));
                ProjectOutcome::Stay
            }
        }
    }

    /// Delete a project after `confirm` agrees to [`DELETE_CONFIRMATION`].
    /// A declined confirmation sends nothing.
    pub fn delete_project(
        &mut self,
        id: ProjectId,
        confirm: impl FnOnce(&str) -> bool,
    ) -> ProjectOutcome {
        if !confirm(DELETE_CONFIRMATION) {
            tracing::debug!(id, "project deletion declined");
            return ProjectOutcome::Stay;
        }

        match self.api.delete_project(id) {
            Ok(response) if response.success => {
                tracing::info!(id, "project deleted");
                self.toasts.push(Toast::success(DELETED));
                ProjectOutcome::Reload
            }
            Ok(_) => {
                self.toasts.push(Toast::error(DELETE_FAILED));
                ProjectOutcome::Stay
            }
            Err(e) => {
                tracing::error!(id, error = %e, "error deleting project");
                self.toasts.push(Toast::error(DELETE_NETWORK));
                ProjectOutcome::Stay
            }
        }
    }
}
