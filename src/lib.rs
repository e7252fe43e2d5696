//! memhub: MCP server for switching and managing knowledge-base projects.
//!
//! The tools are thin adapters over the project directory REST API. The
//! only state kept here is the session's current project.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              MCP Server (rmcp)              │
//! │         JSON-RPC over stdin/stdout          │
//! └─────────────────┬───────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────┐
//! │               Tool Router                    │
//! │   list, switch, current, create, delete     │
//! └───────┬─────────────────┬───────────────────┘
//!         │                 │
//!   ┌─────▼──────┐   ┌──────▼──────┐
//!   │  Session   │   │  Resolver   │
//!   │ (RwLock)   │   │ name/slug   │
//!   └────────────┘   └──────┬──────┘
//!                           │
//!          ┌────────────────▼────────────────┐
//!          │   ProjectDirectory (reqwest)    │
//!          │   /projects/projects, ...       │
//!          └─────────────────────────────────┘
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod fmt;
pub mod resolver;
pub mod server;
pub mod session;
pub mod tools;
pub mod types;

pub use error::{Result, ServerError};
pub use types::{Permalink, ProjectRecord};
