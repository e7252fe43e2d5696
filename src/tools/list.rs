//! `list_memory_projects` tool.

use super::{write_project_footer, ToolContext};
use crate::error::Result;
use serde::Serialize;
use std::fmt;

/// Output for the list tool.
#[derive(Debug, Serialize)]
pub struct ListOutput {
    /// Project the deployment is pinned to; when set, `projects` is ignored.
    pub pinned: Option<String>,
    /// Every project name reported by the backend
    pub projects: Vec<String>,
    /// Current session project
    pub current: String,
}

/// Executes the list tool.
///
/// # Errors
///
/// Returns an error if the project list cannot be fetched.
pub async fn execute_list(ctx: &ToolContext) -> Result<ListOutput> {
    tracing::info!("Listing all available projects");

    let list = ctx.directory.list_projects().await?;

    Ok(ListOutput {
        pinned: ctx.config.pinned_project.clone(),
        projects: list.names(),
        current: ctx.session.current_project(),
    })
}

impl fmt::Display for ListOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(pinned) = &self.pinned {
            writeln!(f, "Project: {pinned}")?;
            writeln!(f)?;
            writeln!(f, "Note: This MCP server is constrained to a single project.")?;
            write!(f, "All operations will automatically use this project.")?;
        } else {
            writeln!(f, "Available projects:")?;
            for name in &self.projects {
                writeln!(f, "• {name}")?;
            }
        }
        write_project_footer(f, &self.current)
    }
}
