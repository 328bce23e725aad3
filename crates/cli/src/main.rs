//! Autosave CLI - autosave command

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

mod cmd;
mod script;
mod util;

/// Autosave - debounced editing of project records
#[derive(Parser)]
#[command(name = "autosave")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project database directory (default: store.path from config)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project record
    Create {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        subhead: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List all project records
    List,
    /// Show a project record
    Show {
        /// Project ID
        id: u64,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Apply an edit script from stdin with debounced saving
    ///
    /// One command per line: `title <text>`, `subhead <text>`,
    /// `description <text>` or `wait <ms>`.
    Edit {
        /// Project ID
        id: u64,
        /// Quiet period before saving (default: debounce.delay_ms from config)
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// View or change configuration
    Config {
        /// List all values (default)
        #[arg(long)]
        list: bool,
        /// Print one value
        #[arg(long, value_name = "KEY")]
        get: Option<String>,
        /// Change one value
        #[arg(long, num_args = 2, value_names = ["KEY", "VALUE"])]
        set: Option<Vec<String>>,
        /// Print the config file location
        #[arg(long)]
        path: bool,
        /// With --path, write a default file if none exists
        #[arg(long, requires = "path")]
        create: bool,
        /// Print an annotated example configuration
        #[arg(long)]
        example: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays scriptable
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Create { title, subhead, description } => {
            cmd::create::run(cli.store, &title, &subhead, &description).await
        }
        Commands::List => cmd::list::run(cli.store).await,
        Commands::Show { id, json } => cmd::show::run(cli.store, id, json).await,
        Commands::Edit { id, delay_ms } => cmd::edit::run(cli.store, id, delay_ms).await,
        Commands::Config { list: _, get, set, path, create, example } => {
            if let Some(key) = get {
                cmd::config::run_get(&key).await
            } else if let Some(pair) = set {
                cmd::config::run_set(&pair[0], &pair[1]).await
            } else if path {
                cmd::config::run_path(create).await
            } else if example {
                cmd::config::run_example().await
            } else {
                cmd::config::run_list().await
            }
        }
    }
}
