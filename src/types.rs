//! Wire types and newtypes for memhub.
//!
//! The structs in this module mirror the JSON bodies exchanged with the
//! project directory API. Unknown fields are ignored so the backend can
//! grow its responses without breaking the tools.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"));
static INVALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9/\-]").expect("valid regex"));
static HYPHEN_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("valid regex"));

/// Normalized slug derived from a project name.
///
/// Two names that differ only in case, separators, or punctuation map to
/// the same permalink: "My Project", "my_project" and "MyProject" all
/// become `my-project`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permalink(String);

impl Permalink {
    /// Derives the permalink for a name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let split = CAMEL_BOUNDARY.replace_all(name, "$1-$2");
        let lowered = split.to_lowercase().replace('_', "-");
        let cleaned = INVALID_CHARS.replace_all(&lowered, "-");
        let collapsed = HYPHEN_RUNS.replace_all(&cleaned, "-");

        let slug = collapsed
            .split('/')
            .map(|segment| segment.trim_matches('-'))
            .collect::<Vec<_>>()
            .join("/");
        Self(slug)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Permalink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Permalink {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// A project as listed by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub path: String,
    pub permalink: Permalink,
    #[serde(default)]
    pub is_default: bool,
}

impl ProjectRecord {
    /// Builds a record whose permalink is derived from its name.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        let name = name.into();
        let permalink = Permalink::from_name(&name);
        Self {
            name,
            path: path.into(),
            permalink,
            is_default: false,
        }
    }
}

/// Response of `GET /projects/projects`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectList {
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub default_project: Option<String>,
}

impl ProjectList {
    /// Project names in listing order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.projects.iter().map(|p| p.name.clone()).collect()
    }
}

/// Body of `POST /projects/projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfoRequest {
    pub name: String,
    pub path: String,
    pub set_default: bool,
}

/// Project summary embedded in status responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub name: String,
    #[serde(default)]
    pub path: Option<String>,
}

/// Response of the create and delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectStatusResponse {
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub old_project: Option<ProjectItem>,
    #[serde(default)]
    pub new_project: Option<ProjectItem>,
}

/// Entity counts for a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStatistics {
    pub total_entities: u64,
    pub total_observations: u64,
    pub total_relations: u64,
}

/// Response of `{project_url}/project/info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInfoResponse {
    #[serde(default)]
    pub project_name: Option<String>,
    pub statistics: ProjectStatistics,
}

/// API prefix for project-scoped endpoints.
#[must_use]
pub fn project_url(project_name: &str) -> String {
    format!("/{}", Permalink::from_name(project_name))
}
