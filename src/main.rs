//! squads: markdown todo workflow tracked in git

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use squads::config::{self, ProjectLayout};

mod commands;

#[derive(Parser)]
#[command(name = "squads")]
#[command(about = "Manage markdown todos committed to git", long_about = None)]
#[command(version)]
struct Cli {
    /// Project root holding the squads/ directory (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    project_root: Option<PathBuf>,

    /// Print debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create squads/todo/§<todo_name>.md from the template and commit it
    Todo {
        /// Name of the new todo
        todo_name: Option<String>,
    },

    /// Move the open todo matching <todo_name> into squads/todo/done/
    Done {
        /// Any substring of the todo file name
        todo_name: Option<String>,
    },

    /// Create the squads/ directory layout (safe to re-run)
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let root = config::resolve_project_root(cli.project_root.as_deref())?;
    let layout = ProjectLayout::new(root);

    match cli.command {
        Commands::Todo { todo_name } => {
            commands::todo::execute(&layout, todo_name.as_deref())?;
        }

        Commands::Done { todo_name } => {
            commands::done::execute(&layout, todo_name.as_deref())?;
        }

        Commands::Init => {
            commands::init::execute(&layout)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
