//! Wire types and transports for the project REST API.

use super::{ProjectError, ProjectResult};
use crate::constants::API_TIMEOUT_SECS;
use crate::settings::EditorSettings;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

/// Server-assigned project id
pub type ProjectId = u64;

/// `{success}` acknowledgement
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProjectResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub project_id: Option<ProjectId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub url: Option<String>,
}

/// Body of a save request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveProjectRequest {
    pub content: Value,
}

/// The four project endpoints.
pub trait ProjectApi {
    /// `POST /create-project`
    fn create_project(&self, fields: &Map<String, Value>) -> ProjectResult<CreateProjectResponse>;

    /// `POST /api/save-project/{id}`
    fn save_project(&self, id: ProjectId, request: &SaveProjectRequest) -> ProjectResult<ApiResponse>;

    /// `POST /api/publish-project/{id}`
    fn publish_project(&self, id: ProjectId) -> ProjectResult<PublishResponse>;

    /// `DELETE /api/delete-project/{id}`
    fn delete_project(&self, id: ProjectId) -> ProjectResult<ApiResponse>;
}

/// Blocking HTTP transport.
#[derive(Clone, Debug)]
pub struct HttpProjectApi {
    client: Client,
    base_url: String,
}

impl HttpProjectApi {
    pub fn new(base_url: impl Into<String>) -> ProjectResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(API_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Client for the API configured in `settings`.
    pub fn from_settings(settings: &EditorSettings) -> ProjectResult<Self> {
        Self::new(settings.api_base_url.as_str())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send and decode the body as JSON whatever the status code; the API
    /// reports failures through `success`.
    fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ProjectResult<T> {
        let response = request.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        tracing::debug!(status, bytes = body.len(), "project api response");
        serde_json::from_str(&body).map_err(|source| ProjectError::Decode { status, source })
    }
}

impl ProjectApi for HttpProjectApi {
    fn create_project(&self, fields: &Map<String, Value>) -> ProjectResult<CreateProjectResponse> {
        self.send(self.client.post(self.url("/create-project")).json(fields))
    }

    fn save_project(&self, id: ProjectId, request: &SaveProjectRequest) -> ProjectResult<ApiResponse> {
        self.send(
            self.client
                .post(self.url(&format!("/api/save-project/{id}")))
                .json(request),
        )
    }

    fn publish_project(&self, id: ProjectId) -> ProjectResult<PublishResponse> {
        self.send(
            self.client
                .post(self.url(&format!("/api/publish-project/{id}")))
                .header(reqwest::header::CONTENT_TYPE, "application/json"),
        )
    }

    fn delete_project(&self, id: ProjectId) -> ProjectResult<ApiResponse> {
        self.send(self.client.delete(self.url(&format!("/api/delete-project/{id}"))))
    }
}
