//! `create_memory_project` and `delete_project` tools.
//!
//! Both are refused outright when the deployment is pinned to one project;
//! the refusal happens before any backend call.

use super::ToolContext;
use crate::error::{Result, ServerError};
use crate::resolver::resolve;
use crate::types::{ProjectInfoRequest, ProjectItem, ProjectRecord};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Input for the create tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateInput {
    /// Name for the new project (must be unique)
    pub project_name: String,
    /// File system path where the project will be stored
    pub project_path: String,
    /// Whether to set this project as the default
    #[serde(default)]
    pub set_default: bool,
}

/// Output for the create tool.
#[derive(Debug, Serialize)]
pub struct CreateOutput {
    /// Status message from the backend
    pub message: String,
    /// Name the caller asked for
    pub requested: String,
    pub new_project: Option<ProjectItem>,
    pub set_default: bool,
}

/// Executes the create tool.
///
/// The session's current project is not changed.
///
/// # Errors
///
/// Returns [`ServerError::OperationDisabled`] on a pinned deployment, or a
/// remote error if the backend rejects the request.
pub async fn execute_create(ctx: &ToolContext, input: CreateInput) -> Result<CreateOutput> {
    if let Some(pinned) = &ctx.config.pinned_project {
        return Err(ServerError::OperationDisabled(format!(
            "Project creation disabled - MCP server is constrained to project '{pinned}'.\n\
             Use the CLI to create projects: `basic-memory project add \"{}\" \"{}\"`",
            input.project_name, input.project_path
        )));
    }

    tracing::info!(
        "Creating project: {} at {}",
        input.project_name,
        input.project_path
    );

    let request = ProjectInfoRequest {
        name: input.project_name.clone(),
        path: input.project_path,
        set_default: input.set_default,
    };
    let status = ctx.directory.create_project(&request).await?;

    Ok(CreateOutput {
        message: status.message,
        requested: input.project_name,
        new_project: status.new_project,
        set_default: input.set_default,
    })
}

impl fmt::Display for CreateOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✓ {}", self.message)?;
        writeln!(f)?;

        if let Some(project) = &self.new_project {
            writeln!(f, "Project Details:")?;
            writeln!(f, "• Name: {}", project.name)?;
            if let Some(path) = &project.path {
                writeln!(f, "• Path: {path}")?;
            }
            if self.set_default {
                writeln!(f, "• Set as default project")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Project is now available for use in tool calls.")?;
        write!(
            f,
            "Use '{}' as the project parameter in MCP tool calls.",
            self.requested
        )
    }
}

/// Input for the delete tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteInput {
    /// Name or permalink of the project to delete
    pub project_name: String,
}

/// What a deletion did to the session pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum SessionEffect {
    /// The deleted project was not the current one.
    Unchanged,
    /// The session moved from the deleted project to `to`.
    Reset { to: String },
    /// The deleted project is also the configured default, so there was
    /// nowhere to move the session.
    Stranded,
}

/// Output for the delete tool.
#[derive(Debug, Serialize)]
pub struct DeleteOutput {
    /// Status message from the backend
    pub message: String,
    /// Canonical name of the deleted project
    pub deleted: String,
    pub old_project: Option<ProjectItem>,
    pub session: SessionEffect,
}

/// Executes the delete tool.
///
/// Only deregisters the project; files on disk are left alone.
///
/// # Errors
///
/// Returns [`ServerError::OperationDisabled`] on a pinned deployment,
/// [`ServerError::NotFound`] if the name does not resolve, or a remote error.
pub async fn execute_delete(ctx: &ToolContext, input: DeleteInput) -> Result<DeleteOutput> {
    if let Some(pinned) = &ctx.config.pinned_project {
        return Err(ServerError::OperationDisabled(format!(
            "Project deletion disabled - MCP server is constrained to project '{pinned}'.\n\
             Use the CLI to delete projects: `basic-memory project remove \"{}\"`",
            input.project_name
        )));
    }

    tracing::info!("Deleting project: {}", input.project_name);

    let list = ctx.directory.list_projects().await?;
    let target = resolve(&input.project_name, &list.projects)?.clone();

    let status = ctx.directory.delete_project(&target.name).await?;
    let session = settle_session(ctx, &target);

    Ok(DeleteOutput {
        message: status.message,
        deleted: target.name,
        old_project: status.old_project,
        session,
    })
}

/// Moves the session off a project that no longer exists.
fn settle_session(ctx: &ToolContext, deleted: &ProjectRecord) -> SessionEffect {
    let refers_to_deleted = |name: &str| resolve(name, std::slice::from_ref(deleted)).is_ok();

    let fallback = &ctx.config.default_project;
    if refers_to_deleted(fallback.as_str()) {
        if refers_to_deleted(ctx.session.current_project().as_str()) {
            tracing::warn!("Deleted project {} is still the session project", deleted.name);
            return SessionEffect::Stranded;
        }
        return SessionEffect::Unchanged;
    }

    match ctx
        .session
        .replace_if(refers_to_deleted, fallback.clone())
    {
        Some(_) => {
            tracing::info!("Session moved from deleted project {} to {}", deleted.name, fallback);
            SessionEffect::Reset {
                to: fallback.clone(),
            }
        }
        None => SessionEffect::Unchanged,
    }
}

impl fmt::Display for DeleteOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✓ {}", self.message)?;
        writeln!(f)?;

        if let Some(project) = &self.old_project {
            writeln!(f, "Removed project details:")?;
            writeln!(f, "• Name: {}", project.name)?;
            if let Some(path) = &project.path {
                writeln!(f, "• Path: {path}")?;
            }
        }

        writeln!(
            f,
            "Files remain on disk but project is no longer tracked by Basic Memory."
        )?;
        write!(f, "Re-add the project to access its content again.")?;

        match &self.session {
            SessionEffect::Unchanged => Ok(()),
            SessionEffect::Reset { to } => write!(
                f,
                "\n\nThe current project was '{}'; the session now uses '{to}'.",
                self.deleted
            ),
            SessionEffect::Stranded => write!(
                f,
                "\n\nWarning: '{}' was the current project and is also the configured default. \
                 Use switch_project to select another project.",
                self.deleted
            ),
        }
    }
}
