// SPDX-License-Identifier: AGPL-3.0-or-later
//! snpath CLI
//!
//! Path joining, normalization and decomposition from the shell, plus the
//! basic file operations built on them.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use commands::Settings;
use config::{Config, SeparatorSetting};

#[derive(Parser)]
#[command(name = "snpath")]
#[command(author, version, about = "snpath - path string toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Separator written by join and normalize
    #[arg(long, global = true, value_enum)]
    separator: Option<SeparatorSetting>,
}

#[derive(Subcommand)]
enum Commands {
    /// Join two path fragments
    Join {
        a: String,
        b: String,

        /// Normalize the joined path
        #[arg(short, long)]
        normalize: bool,
    },

    /// Canonicalize separators and collapse `.` and `..` segments
    Normalize {
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Print the last path segment
    #[command(alias = "basename")]
    Filename { path: String },

    /// Print the file extension (exit code 1 if there is none)
    #[command(alias = "ext")]
    Extension { path: String },

    /// Print the file name without its extension
    Stem { path: String },

    /// Print everything before the last separator
    #[command(alias = "dirname")]
    Parent { path: String },

    /// Exit with 0 if the path exists, 1 otherwise
    Exists { path: String },

    /// Show file or directory information
    Stat { path: String },

    /// List directory contents
    #[command(alias = "dir")]
    Ls {
        /// Path to list (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,

        /// Long format with details
        #[arg(short, long)]
        long: bool,

        /// Show all files including hidden
        #[arg(short, long)]
        all: bool,

        /// Human-readable sizes
        #[arg(short = 'H', long)]
        human: bool,
    },

    /// Create directories
    Mkdir {
        #[arg(required = true)]
        paths: Vec<String>,

        /// Create parent directories as needed
        #[arg(short, long)]
        parents: bool,
    },

    /// Remove files
    Rm {
        #[arg(required = true)]
        paths: Vec<String>,

        /// Ignore missing files
        #[arg(short, long)]
        force: bool,
    },

    /// Remove empty directories
    Rmdir {
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Copy a file
    Cp {
        source: String,
        dest: String,

        /// Overwrite an existing destination
        #[arg(short, long)]
        force: bool,
    },

    /// Move or rename a file
    Mv {
        source: String,
        dest: String,

        /// Overwrite an existing destination
        #[arg(short, long)]
        force: bool,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match Config::load(cli.config.as_deref()).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let settings = Settings::new(config, cli.separator);

    let result = match cli.command {
        Commands::Join { a, b, normalize } => commands::join(&settings, &a, &b, normalize).map(|()| true),
        Commands::Normalize { paths } => commands::normalize(&settings, &paths).map(|()| true),
        Commands::Filename { path } => commands::filename(&path).map(|()| true),
        Commands::Extension { path } => commands::extension(&path),
        Commands::Stem { path } => commands::stem(&path).map(|()| true),
        Commands::Parent { path } => commands::parent(&path),
        Commands::Exists { path } => commands::exists(&path).await,
        Commands::Stat { path } => commands::stat(&path).await.map(|()| true),
        Commands::Ls { path, long, all, human } => {
            commands::ls(&path, long, all, human).await.map(|()| true)
        }
        Commands::Mkdir { paths, parents } => commands::mkdir(&paths, parents).await.map(|()| true),
        Commands::Rm { paths, force } => commands::rm(&paths, force).await.map(|()| true),
        Commands::Rmdir { paths } => commands::rmdir(&paths).await.map(|()| true),
        Commands::Cp { source, dest, force } => commands::cp(&source, &dest, force).await.map(|()| true),
        Commands::Mv { source, dest, force } => commands::mv(&source, &dest, force).await.map(|()| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
