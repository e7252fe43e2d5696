//! Runtime configuration.
//!
//! Values come from command-line flags or their environment variables (see
//! `main.rs`) and are validated once at startup. Tools only ever read them.

use crate::error::{Result, ServerError};
use std::time::Duration;

/// Environment variable that pins the server to a single project.
pub const PROJECT_PIN_ENV: &str = "BASIC_MEMORY_MCP_PROJECT";

/// Backend API used when none is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Project the session starts on when neither a pin nor a default is given.
pub const DEFAULT_PROJECT: &str = "main";

/// Validated server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the project directory API, without trailing slash.
    pub api_url: String,
    /// Project the deployment is constrained to, if any.
    pub pinned_project: Option<String>,
    /// Project a fresh session starts on.
    pub default_project: String,
    /// Upper bound on every backend request.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            pinned_project: None,
            default_project: DEFAULT_PROJECT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Builds and validates a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] if the API URL is not http(s), the pin
    /// is blank, or the timeout is zero.
    pub fn new(
        api_url: &str,
        pinned_project: Option<String>,
        default_project: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self> {
        let api_url = api_url.trim().trim_end_matches('/');
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ServerError::Config(format!(
                "API URL must start with http:// or https://, got '{api_url}'"
            )));
        }

        let pinned_project = match pinned_project {
            Some(p) if p.trim().is_empty() => {
                return Err(ServerError::Config(format!(
                    "{PROJECT_PIN_ENV} is set but empty"
                )))
            }
            Some(p) => Some(p.trim().to_string()),
            None => None,
        };

        if timeout_secs == 0 {
            return Err(ServerError::Config("timeout must be at least 1 second".into()));
        }

        let default_project = default_project
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PROJECT.to_string());

        Ok(Self {
            api_url: api_url.to_string(),
            pinned_project,
            default_project,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Returns a copy constrained to `project`.
    #[must_use]
    pub fn pinned_to(mut self, project: impl Into<String>) -> Self {
        self.pinned_project = Some(project.into());
        self
    }

    /// Whether the deployment is locked to one project.
    #[must_use]
    pub fn is_constrained(&self) -> bool {
        self.pinned_project.is_some()
    }

    /// The project a new session starts on: the pin if set, else the default.
    #[must_use]
    pub fn initial_project(&self) -> &str {
        self.pinned_project
            .as_deref()
            .unwrap_or(&self.default_project)
    }
}
