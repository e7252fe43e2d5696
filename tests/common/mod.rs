//! Common test utilities for memhub integration tests.
//!
//! Provides `FakeDirectory`, an in-memory project directory with call
//! counters and failure injection, and helpers to wire it into a
//! `ToolContext`.

#![allow(dead_code)] // Test utilities may not all be used in every test file

use async_trait::async_trait;
use memhub::client::ProjectDirectory;
use memhub::config::Config;
use memhub::error::{RemoteError, RemoteResult};
use memhub::tools::ToolContext;
use memhub::types::{
    ProjectInfoRequest, ProjectInfoResponse, ProjectItem, ProjectList, ProjectRecord,
    ProjectStatistics, ProjectStatusResponse,
};
use reqwest::Method;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// In-memory stand-in for the project directory API.
#[derive(Default)]
pub struct FakeDirectory {
    projects: Mutex<Vec<ProjectRecord>>,
    pub list_calls: AtomicUsize,
    pub info_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub fail_list: AtomicBool,
    pub fail_info: AtomicBool,
    /// Delay applied to list calls, to widen race windows.
    pub list_delay: Mutex<Option<Duration>>,
}

impl FakeDirectory {
    /// Creates a directory holding the named projects at `/data/<name>`.
    pub fn with_projects(names: &[&str]) -> Self {
        let dir = Self::default();
        {
            let mut projects = dir.projects.lock().unwrap();
            for name in names {
                projects.push(ProjectRecord::new(*name, format!("/data/{name}")));
            }
        }
        dir
    }

    pub fn names(&self) -> Vec<String> {
        self.projects
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.name.clone())
            .collect()
    }

    pub fn total_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
            + self.info_calls.load(Ordering::SeqCst)
            + self.create_calls.load(Ordering::SeqCst)
            + self.delete_calls.load(Ordering::SeqCst)
    }

    fn unreachable(path: &str) -> RemoteError {
        RemoteError::Status {
            method: Method::GET,
            path: path.to_string(),
            status: 503,
            detail: "backend unavailable".to_string(),
        }
    }
}

/// Deterministic statistics per project, so tests can tell them apart.
pub fn stats_for(name: &str) -> ProjectStatistics {
    let n = name.len() as u64;
    ProjectStatistics {
        total_entities: n,
        total_observations: n * 10,
        total_relations: n * 2,
    }
}

#[async_trait]
impl ProjectDirectory for FakeDirectory {
    async fn list_projects(&self) -> RemoteResult<ProjectList> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.list_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(Self::unreachable("/projects/projects"));
        }
        Ok(ProjectList {
            projects: self.projects.lock().unwrap().clone(),
            default_project: None,
        })
    }

    async fn create_project(
        &self,
        request: &ProjectInfoRequest,
    ) -> RemoteResult<ProjectStatusResponse> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let mut projects = self.projects.lock().unwrap();
        if projects
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(&request.name))
        {
            return Err(RemoteError::Status {
                method: Method::POST,
                path: "/projects/projects".to_string(),
                status: 400,
                detail: format!("Project '{}' already exists", request.name),
            });
        }
        projects.push(ProjectRecord::new(&request.name, &request.path));
        Ok(ProjectStatusResponse {
            message: format!("Project '{}' added successfully", request.name),
            status: Some("success".to_string()),
            default: request.set_default,
            old_project: None,
            new_project: Some(ProjectItem {
                name: request.name.clone(),
                path: Some(request.path.clone()),
            }),
        })
    }

    async fn delete_project(&self, name: &str) -> RemoteResult<ProjectStatusResponse> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let mut projects = self.projects.lock().unwrap();
        let Some(idx) = projects.iter().position(|p| p.name == name) else {
            return Err(RemoteError::Status {
                method: Method::DELETE,
                path: format!("/projects/{name}"),
                status: 404,
                detail: format!("Project '{name}' not found"),
            });
        };
        let removed = projects.remove(idx);
        Ok(ProjectStatusResponse {
            message: format!("Project '{}' removed successfully", removed.name),
            status: Some("success".to_string()),
            default: false,
            old_project: Some(ProjectItem {
                name: removed.name,
                path: Some(removed.path),
            }),
            new_project: None,
        })
    }

    async fn project_info(&self, project_name: &str) -> RemoteResult<ProjectInfoResponse> {
        self.info_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_info.load(Ordering::SeqCst) {
            return Err(Self::unreachable("/project/info"));
        }
        Ok(ProjectInfoResponse {
            project_name: Some(project_name.to_string()),
            statistics: stats_for(project_name),
        })
    }
}

/// Wires a fake directory into a tool context.
pub fn context(dir: &Arc<FakeDirectory>, config: Config) -> ToolContext {
    ToolContext::new(Arc::clone(dir) as Arc<dyn ProjectDirectory>, config)
}

/// A context on an unconstrained deployment whose session starts on `current`.
pub fn open_context(names: &[&str], current: &str) -> (Arc<FakeDirectory>, ToolContext) {
    let dir = Arc::new(FakeDirectory::with_projects(names));
    let config = Config {
        default_project: current.to_string(),
        ..Config::default()
    };
    let ctx = context(&dir, config);
    (dir, ctx)
}

/// A context pinned to `pinned`.
pub fn pinned_context(names: &[&str], pinned: &str) -> (Arc<FakeDirectory>, ToolContext) {
    let dir = Arc::new(FakeDirectory::with_projects(names));
    let ctx = context(&dir, Config::default().pinned_to(pinned));
    (dir, ctx)
}
