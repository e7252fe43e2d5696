//! memhub: MCP server for knowledge-base project management.
//!
//! Usage:
//!   memhub --mcp                          # Start MCP server (stdin/stdout)
//!   memhub list                           # List projects
//!   memhub current                        # Show the default project's stats
//!   memhub info <name>                    # Show a project's stats
//!   memhub create <name> <path> [--default]
//!   memhub delete <name>

use clap::{Parser, Subcommand};
use memhub::client::HttpProjectDirectory;
use memhub::config::{Config, DEFAULT_API_URL, PROJECT_PIN_ENV};
use memhub::server::MemhubServer;
use memhub::tools::{self, ToolContext};
use rmcp::ServiceExt;
use std::io::IsTerminal;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "memhub")]
#[command(about = "MCP server for knowledge-base project management")]
#[command(version)]
struct Cli {
    /// Run as MCP server (stdin/stdout JSON-RPC)
    #[arg(long)]
    mcp: bool,

    /// Base URL of the project directory API
    #[arg(long, env = "BASIC_MEMORY_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Constrain the server to a single project
    #[arg(long, env = PROJECT_PIN_ENV)]
    project: Option<String>,

    /// Project the session starts on (default: main)
    #[arg(long, env = "BASIC_MEMORY_DEFAULT_PROJECT")]
    default_project: Option<String>,

    /// Timeout for backend requests, in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Disable colored CLI output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available projects
    List,

    /// Show the session's starting project and its statistics
    Current,

    /// Show statistics for a project
    Info {
        /// Project name (default: the starting project)
        name: Option<String>,
    },

    /// Create a project
    Create {
        /// Project name
        name: String,

        /// Directory for the project's files
        path: String,

        /// Make it the default project
        #[arg(long = "default")]
        set_default: bool,
    },

    /// Delete a project (files stay on disk)
    Delete {
        /// Project name or permalink
        name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // CRITICAL: Log to stderr only (stdout is JSON-RPC for MCP)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("memhub=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::new(
        &cli.api_url,
        cli.project,
        cli.default_project,
        cli.timeout_secs,
    )?;
    let directory = Arc::new(HttpProjectDirectory::new(&config)?);

    if cli.mcp {
        run_mcp_server(directory, config).await
    } else if let Some(cmd) = cli.command {
        let color = !cli.no_color && std::io::stdout().is_terminal();
        run_cli(ToolContext::new(directory, config), cmd, color).await
    } else {
        // Default: show help
        eprintln!("Use --mcp to start MCP server, or a subcommand for CLI mode.");
        eprintln!("Run with --help for more information.");
        std::process::exit(1);
    }
}

async fn run_mcp_server(directory: Arc<HttpProjectDirectory>, config: Config) -> anyhow::Result<()> {
    match &config.pinned_project {
        Some(pinned) => tracing::info!(
            "Starting MCP server against {} (constrained to {})",
            config.api_url,
            pinned
        ),
        None => tracing::info!(
            "Starting MCP server against {} (default project {})",
            config.api_url,
            config.default_project
        ),
    }

    let server = MemhubServer::new(directory, config);

    // Run the MCP server on stdin/stdout
    let service = server.serve(rmcp::transport::io::stdio()).await?;
    service.waiting().await?;

    Ok(())
}

async fn run_cli(ctx: ToolContext, cmd: Commands, color: bool) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();

    match cmd {
        Commands::List => {
            let result = tools::execute_list(&ctx).await?;
            memhub::fmt::fmt_list(&mut out, &result, color)?;
        }

        Commands::Current => {
            let result = tools::execute_current(&ctx).await?;
            memhub::fmt::fmt_stats(&mut out, &result, color)?;
        }

        Commands::Info { name } => {
            let input = tools::InfoInput { project_name: name };
            let result = tools::execute_info(&ctx, input).await?;
            memhub::fmt::fmt_stats(&mut out, &result, color)?;
        }

        Commands::Create {
            name,
            path,
            set_default,
        } => {
            let input = tools::CreateInput {
                project_name: name,
                project_path: path,
                set_default,
            };
            let result = tools::execute_create(&ctx, input).await?;
            memhub::fmt::fmt_create(&mut out, &result, color)?;
        }

        Commands::Delete { name } => {
            let input = tools::DeleteInput { project_name: name };
            let result = tools::execute_delete(&ctx, input).await?;
            memhub::fmt::fmt_delete(&mut out, &result, color)?;
        }
    }

    Ok(())
}
