//! `switch_project` tool.
//!
//! Switching never fails at the tool boundary: every failure is rendered as
//! text. A failed call writes nothing to the session, so a switch committed
//! by a concurrent call survives it.

use super::{write_project_footer, ToolContext};
use crate::error::{ResolveError, Result};
use crate::resolver::resolve;
use crate::types::ProjectStatistics;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Input for the switch tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SwitchInput {
    /// Name or permalink of the project to switch to
    pub project_name: String,
}

/// Outcome of a switch attempt.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SwitchOutput {
    /// The session now points at `project`.
    Switched {
        project: String,
        /// `None` when the summary could not be fetched.
        summary: Option<ProjectStatistics>,
    },
    /// No listed project matched.
    NotFound {
        requested: String,
        available: Vec<String>,
    },
    /// The deployment is pinned; switching is meaningless.
    Disabled { requested: String, pinned: String },
    /// The backend call failed; the session is still on `current`.
    Failed {
        requested: String,
        reason: String,
        current: String,
    },
}

impl SwitchOutput {
    #[must_use]
    pub fn is_switched(&self) -> bool {
        matches!(self, Self::Switched { .. })
    }
}

/// Executes the switch tool.
pub async fn execute_switch(ctx: &ToolContext, input: SwitchInput) -> SwitchOutput {
    tracing::info!("Switching to project: {}", input.project_name);

    if let Some(pinned) = &ctx.config.pinned_project {
        return SwitchOutput::Disabled {
            requested: input.project_name,
            pinned: pinned.clone(),
        };
    }

    match try_switch(ctx, &input.project_name).await {
        Ok(output) => output,
        Err(e) => {
            tracing::error!("Error switching to project {}: {}", input.project_name, e);
            SwitchOutput::Failed {
                requested: input.project_name,
                reason: e.to_string(),
                current: ctx.session.current_project(),
            }
        }
    }
}

/// Fails only before the session is written; a missing summary after the
/// write is reported in the output instead.
async fn try_switch(ctx: &ToolContext, requested: &str) -> Result<SwitchOutput> {
    let list = ctx.directory.list_projects().await?;

    let project = match resolve(requested, &list.projects) {
        Ok(record) => record.name.clone(),
        Err(ResolveError::NotFound { available, .. }) => {
            return Ok(SwitchOutput::NotFound {
                requested: requested.to_string(),
                available,
            })
        }
    };

    ctx.session.set_current_project(project.clone());

    let summary = match ctx.directory.project_info(&project).await {
        Ok(info) => Some(info.statistics),
        Err(e) => {
            tracing::warn!("Could not get project info for {}: {}", project, e);
            None
        }
    };

    Ok(SwitchOutput::Switched { project, summary })
}

impl fmt::Display for SwitchOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Switched { project, summary } => {
                writeln!(f, "✓ Switched to {project} project")?;
                writeln!(f)?;
                match summary {
                    Some(stats) => {
                        writeln!(f, "Project Summary:")?;
                        writeln!(f, "• {} entities", stats.total_entities)?;
                        writeln!(f, "• {} observations", stats.total_observations)?;
                        writeln!(f, "• {} relations", stats.total_relations)?;
                    }
                    None => writeln!(f, "Project summary unavailable.")?,
                }
                write_project_footer(f, project)
            }
            Self::NotFound {
                requested,
                available,
            } => write!(
                f,
                "Error: Project '{requested}' not found. Available projects: {}",
                available.join(", ")
            ),
            Self::Disabled { requested, pinned } => write!(
                f,
                "# Error\n\n\
                 Cannot switch to '{requested}' - MCP server is constrained to project '{pinned}'.\n\
                 All operations already use this project."
            ),
            Self::Failed {
                requested,
                reason,
                current,
            } => write!(
                f,
                "# Project Switch Failed\n\n\
                 Could not switch to project '{requested}': {reason}\n\n\
                 ## Current project: {current}\n\
                 Your session remains on the previous project.\n\n\
                 ## Troubleshooting:\n\
                 1. **Check available projects**: Use `list_memory_projects()` to see valid project names\n\
                 2. **Verify spelling**: Ensure the project name is spelled correctly\n\
                 3. **Check permissions**: Verify you have access to the requested project\n\
                 4. **Try again**: The error might be temporary\n\n\
                 ## Available options:\n\
                 - See all projects: `list_memory_projects()`\n\
                 - Stay on current project: `get_current_project()`\n\
                 - Try different project: `switch_project(\"correct-project-name\")`"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_switched_without_summary() {
        let out = SwitchOutput::Switched {
            project: "research".into(),
            summary: None,
        };
        let text = out.to_string();
        assert!(text.starts_with("✓ Switched to research project\n\n"));
        assert!(text.contains("Project summary unavailable."));
        assert!(text.ends_with("<!-- Project: research -->"));
    }

    #[test]
    fn test_render_failed_names_both_projects() {
        let out = SwitchOutput::Failed {
            requested: "beta".into(),
            reason: "connection refused".into(),
            current: "alpha".into(),
        };
        let text = out.to_string();
        assert!(text.starts_with("# Project Switch Failed"));
        assert!(text.contains("Could not switch to project 'beta': connection refused"));
        assert!(text.contains("## Current project: alpha"));
        assert!(!out.is_switched());
    }
}
