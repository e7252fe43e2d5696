//! `get_current_project` tool, plus the CLI-only project info lookup.

use super::{write_project_footer, ToolContext};
use crate::error::Result;
use crate::types::ProjectStatistics;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output for the current-project and info tools.
#[derive(Debug, Serialize)]
pub struct CurrentOutput {
    pub project: String,
    pub statistics: ProjectStatistics,
}

/// Input for the info lookup.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct InfoInput {
    /// Project to describe (default: current project)
    #[serde(default)]
    pub project_name: Option<String>,
}

/// Executes the current-project tool.
///
/// # Errors
///
/// Returns an error if the statistics cannot be fetched.
pub async fn execute_current(ctx: &ToolContext) -> Result<CurrentOutput> {
    tracing::info!("Getting current project information");

    let project = ctx.session.current_project();
    describe(ctx, project).await
}

/// Fetches statistics for a named project without touching the session.
///
/// # Errors
///
/// Returns an error if the statistics cannot be fetched.
pub async fn execute_info(ctx: &ToolContext, input: InfoInput) -> Result<CurrentOutput> {
    let project = input
        .project_name
        .unwrap_or_else(|| ctx.session.current_project());
    describe(ctx, project).await
}

async fn describe(ctx: &ToolContext, project: String) -> Result<CurrentOutput> {
    let info = ctx.directory.project_info(&project).await?;
    Ok(CurrentOutput {
        project,
        statistics: info.statistics,
    })
}

impl fmt::Display for CurrentOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.statistics;
        writeln!(f, "Current project: {}", self.project)?;
        writeln!(f)?;
        writeln!(f, "• {} entities", stats.total_entities)?;
        writeln!(f, "• {} observations", stats.total_observations)?;
        write!(f, "• {} relations", stats.total_relations)?;
        write_project_footer(f, &self.project)
    }
}
