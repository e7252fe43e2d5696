//! Client for the project directory REST API.
//!
//! [`ProjectDirectory`] is the seam the tools are written against;
//! [`HttpProjectDirectory`] is the reqwest-backed implementation used in
//! production.

use crate::config::Config;
use crate::error::{RemoteError, RemoteResult, ServerError};
use crate::types::{
    project_url, ProjectInfoRequest, ProjectInfoResponse, ProjectList, ProjectStatusResponse,
};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

/// Endpoint listing and creating projects.
pub const PROJECTS_PATH: &str = "/projects/projects";

/// Operations the tools need from the backend.
#[async_trait]
pub trait ProjectDirectory: Send + Sync {
    /// `GET /projects/projects`
    async fn list_projects(&self) -> RemoteResult<ProjectList>;

    /// `POST /projects/projects`
    async fn create_project(
        &self,
        request: &ProjectInfoRequest,
    ) -> RemoteResult<ProjectStatusResponse>;

    /// `DELETE /projects/{name}` with `name` percent-encoded.
    async fn delete_project(&self, name: &str) -> RemoteResult<ProjectStatusResponse>;

    /// `GET {project_url}/project/info?project_name=...`
    async fn project_info(&self, project_name: &str) -> RemoteResult<ProjectInfoResponse>;
}

/// HTTP implementation of [`ProjectDirectory`].
#[derive(Debug, Clone)]
pub struct HttpProjectDirectory {
    client: Client,
    base_url: String,
}

impl HttpProjectDirectory {
    /// Creates a client for `config.api_url` with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, ServerError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ServerError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends `method path`, letting `build` attach a query or body, and
    /// decodes a successful JSON response.
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> RemoteResult<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{method} {url}");

        let request = build(self.client.request(method.clone(), &url));
        let response = request.send().await.map_err(|source| RemoteError::Request {
            url: url.clone(),
            source,
        })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| RemoteError::Request { url, source })?;

        if !status.is_success() {
            let detail = error_detail(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string());
            return Err(RemoteError::Status {
                method,
                path: path.to_string(),
                status: status.as_u16(),
                detail,
            });
        }

        serde_json::from_str(&body).map_err(|e| RemoteError::Decode {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Extracts a human-readable reason from an error body.
///
/// The backend reports failures as `{"detail": ...}`; anything else is
/// passed through as text.
fn error_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => match map.get("detail") {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => Some(body.to_string()),
        },
        _ => Some(body.to_string()),
    }
}

#[async_trait]
impl ProjectDirectory for HttpProjectDirectory {
    async fn list_projects(&self) -> RemoteResult<ProjectList> {
        self.send(Method::GET, PROJECTS_PATH, |r| r).await
    }

    async fn create_project(
        &self,
        body: &ProjectInfoRequest,
    ) -> RemoteResult<ProjectStatusResponse> {
        self.send(Method::POST, PROJECTS_PATH, |r| r.json(body)).await
    }

    async fn delete_project(&self, name: &str) -> RemoteResult<ProjectStatusResponse> {
        let path = format!("/projects/{}", urlencoding::encode(name));
        self.send(Method::DELETE, &path, |r| r).await
    }

    async fn project_info(&self, project_name: &str) -> RemoteResult<ProjectInfoResponse> {
        let path = format!("{}/project/info", project_url(project_name));
        self.send(Method::GET, &path, |r| {
            r.query(&[("project_name", project_name)])
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_prefers_detail_field() {
        assert_eq!(
            error_detail(r#"{"detail": "Project 'x' already exists"}"#).as_deref(),
            Some("Project 'x' already exists")
        );
    }

    #[test]
    fn test_error_detail_non_string_detail() {
        let detail = error_detail(r#"{"detail": [{"loc": ["body", "name"]}]}"#).unwrap();
        assert!(detail.starts_with('['));
    }

    #[test]
    fn test_error_detail_plain_text_and_empty() {
        assert_eq!(error_detail("  bad gateway \n").as_deref(), Some("bad gateway"));
        assert_eq!(error_detail(""), None);
    }

    #[test]
    fn test_base_url_from_config() {
        let config = Config::new("http://localhost:9/", None, None, 3).unwrap();
        let client = HttpProjectDirectory::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9");
    }
}
