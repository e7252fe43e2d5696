//! MCP server implementation using rmcp.

use crate::client::ProjectDirectory;
use crate::config::Config;
use crate::tools::{self, CreateInput, DeleteInput, SwitchInput, ToolContext};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use std::fmt::Display;
use std::sync::Arc;

/// Turns an executor result into an MCP tool result.
///
/// Executor errors become tool-level errors (`is_error = true`) carrying
/// the error text, so the agent sees them instead of a protocol failure.
fn to_tool_result<T, E>(name: &'static str, result: Result<T, E>) -> CallToolResult
where
    T: Display,
    E: Display,
{
    match result {
        Ok(output) => CallToolResult::success(vec![Content::text(output.to_string())]),
        Err(e) => {
            tracing::debug!("[{name}] failed: {e}");
            CallToolResult::error(vec![Content::text(e.to_string())])
        }
    }
}

/// MCP server exposing project management tools.
///
/// Each server instance owns one session: the current project selected via
/// `switch_project` persists for as long as the instance lives.
#[derive(Clone)]
pub struct MemhubServer {
    ctx: ToolContext,
    tool_router: ToolRouter<Self>,
}

impl MemhubServer {
    /// Creates a server whose session starts on the configured project.
    pub fn new(directory: Arc<dyn ProjectDirectory>, config: Config) -> Self {
        Self {
            ctx: ToolContext::new(directory, config),
            tool_router: Self::tool_router(),
        }
    }
}

// Tool implementations using rmcp macros
#[tool_router]
impl MemhubServer {
    /// List all available projects.
    #[tool(description = "List all available projects.\n\n\
        Use at conversation start when the project is unknown, when the user asks about \
        available projects, or before any operation that needs a project.\n\
        After calling: ask the user which project to use and remember it for the session.")]
    async fn list_memory_projects(&self) -> Result<CallToolResult, McpError> {
        let result = tools::execute_list(&self.ctx).await;
        Ok(to_tool_result("list_memory_projects", result))
    }

    /// Switch the session to another project.
    #[tool(description = "Switch to a different project context.\n\n\
        Changes the active project for all subsequent tool calls and shows a project summary.\n\n\
        Examples: switch_project('work-notes'), switch_project('personal-journal')")]
    async fn switch_project(
        &self,
        Parameters(input): Parameters<SwitchInput>,
    ) -> Result<CallToolResult, McpError> {
        let output = tools::execute_switch(&self.ctx, input).await;
        Ok(CallToolResult::success(vec![Content::text(output.to_string())]))
    }

    /// Show the current project with basic statistics.
    #[tool(description = "Show the currently active project and its entity, observation and relation counts.")]
    async fn get_current_project(&self) -> Result<CallToolResult, McpError> {
        let result = tools::execute_current(&self.ctx).await;
        Ok(to_tool_result("get_current_project", result))
    }

    /// Register a new project with the backend.
    #[tool(description = "Create a new project.\n\n\
        The project directory is created if it doesn't exist. Optionally sets the new project as default.\n\
        The current session project is not changed.\n\n\
        Examples: create_memory_project('my-research', '~/Documents/research'), \
        create_memory_project('work-notes', '/home/user/work', set_default=true)")]
    async fn create_memory_project(
        &self,
        Parameters(input): Parameters<CreateInput>,
    ) -> Result<CallToolResult, McpError> {
        let result = tools::execute_create(&self.ctx, input).await;
        Ok(to_tool_result("create_memory_project", result))
    }

    /// Deregister a project.
    #[tool(description = "Delete a project.\n\n\
        Removes the project from configuration and database records. Files on disk are NOT deleted.\n\
        This cannot be undone; the project must be re-added to access its content again.\n\n\
        Example: delete_project('old-project')")]
    async fn delete_project(
        &self,
        Parameters(input): Parameters<DeleteInput>,
    ) -> Result<CallToolResult, McpError> {
        let result = tools::execute_delete(&self.ctx, input).await;
        Ok(to_tool_result("delete_project", result))
    }
}

// Implement ServerHandler trait
#[tool_handler]
impl ServerHandler for MemhubServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(instructions(&self.ctx.config)),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn instructions(config: &Config) -> String {
    let mode = match &config.pinned_project {
        Some(pinned) => format!(
            "This server is constrained to project '{pinned}'. \
             Project creation, deletion and switching are disabled."
        ),
        None => format!(
            "The session starts on project '{}'.\n\n\
             WORKFLOW:\n\
             1. list_memory_projects -> discover projects\n\
             2. switch_project -> choose one for the session\n\
             3. get_current_project -> confirm the active project\n\
             4. create_memory_project / delete_project -> manage projects",
            config.default_project
        ),
    };
    format!("memhub: project management for the knowledge base.\n\n{mode}")
}
