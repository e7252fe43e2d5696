//! MCP tool implementations.
//!
//! Each `execute_*` function takes the shared [`ToolContext`] and a typed
//! input, talks to the project directory, and returns a typed output whose
//! `Display` impl is the text handed back to the agent.

mod current;
mod list;
mod manage;
mod switch;

use crate::client::ProjectDirectory;
use crate::config::Config;
use crate::session::SessionState;
use std::fmt;
use std::sync::Arc;

// current
pub use current::{execute_current, execute_info, CurrentOutput, InfoInput};

// list
pub use list::{execute_list, ListOutput};

// manage
pub use manage::{
    execute_create, execute_delete, CreateInput, CreateOutput, DeleteInput, DeleteOutput,
    SessionEffect,
};

// switch
pub use switch::{execute_switch, SwitchInput, SwitchOutput};

/// Everything a tool call needs: the backend, the session, and config.
#[derive(Clone)]
pub struct ToolContext {
    pub directory: Arc<dyn ProjectDirectory>,
    pub session: SessionState,
    pub config: Arc<Config>,
}

impl ToolContext {
    /// Creates a context whose session starts on the configured project.
    pub fn new(directory: Arc<dyn ProjectDirectory>, config: Config) -> Self {
        let session = SessionState::new(config.initial_project());
        Self {
            directory,
            session,
            config: Arc::new(config),
        }
    }
}

/// Trailing marker naming the project a response was produced for.
fn write_project_footer(f: &mut fmt::Formatter<'_>, project: &str) -> fmt::Result {
    write!(f, "\n\n<!-- Project: {project} -->")
}
