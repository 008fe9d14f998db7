//! CLI entry point for the `ungraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use ungraph::cli::{commands, CliError};

#[derive(Parser)]
#[command(
    name = "ungraph",
    about = "ungraph CLI — undirected graph queries and traversal"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Depth-first traversal from a root vertex
    Dfs {
        /// Root vertex label
        #[arg(long, default_value = "A")]
        root: String,
        /// JSON adjacency file (object of label -> neighbor array); uses the
        /// built-in sample graph when omitted
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Structural facts: order, edges, connectivity, regularity, tree test
    Info {
        /// JSON adjacency file; uses the built-in sample graph when omitted
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    let result = match cli.command {
        Commands::Dfs { root, file } => commands::cmd_dfs(file.as_deref(), &root, json),
        Commands::Info { file } => commands::cmd_info(file.as_deref(), json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            CliError::Io(_) => 1,
            CliError::Json(_) | CliError::Mapping(_) => 2,
            CliError::Graph(_) => 4,
        };
        process::exit(code);
    }
}
