//! Command-line interface definition.
//!
//! This module defines the CLI structure using clap derive macros,
//! including all subcommands and their arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// allscreenshots - client for the Allscreenshots screenshot API
///
/// Capture screenshots from the command line or run the sample web
/// application that forwards capture requests to the API.
#[derive(Debug, Parser)]
#[command(name = "allscreenshots")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, env = "ALLSCREENSHOTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Returns the effective log level based on verbose/quiet flags.
    /// Returns: (level_name, is_quiet)
    pub fn log_level(&self) -> (&'static str, bool) {
        if self.quiet {
            return ("error", true);
        }

        let level = match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };

        (level, false)
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the sample web application
    Serve(ServeArgs),

    /// Capture a screenshot and write it to a file
    Capture(CaptureArgs),

    /// Show account usage and quota
    Usage(UsageArgs),

    /// Configuration file operations
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Arguments for the `serve` subcommand.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Bind address
    #[arg(long, default_value = "0.0.0.0")]
    pub bind: String,

    /// Listen port
    #[arg(long, default_value = "8080")]
    pub port: u16,
}

/// Arguments for the `capture` subcommand.
#[derive(Debug, Args)]
pub struct CaptureArgs {
    /// URL to capture
    pub url: String,

    /// Output file path
    #[arg(short, long, default_value = "screenshot.png")]
    pub output: PathBuf,

    /// Device preset (e.g. "Desktop HD", "iPhone 14")
    #[arg(short, long)]
    pub device: Option<String>,

    /// Capture the full scrollable page
    #[arg(long)]
    pub full_page: bool,

    /// Delay in milliseconds before capturing
    #[arg(long)]
    pub delay: Option<u32>,

    /// Render with dark mode enabled
    #[arg(long)]
    pub dark_mode: bool,
}

/// Arguments for the `usage` subcommand.
#[derive(Debug, Args)]
pub struct UsageArgs {
    /// Show quota status instead of usage statistics
    #[arg(long)]
    pub quota: bool,
}

/// Configuration subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Validate the configuration file
    Validate,

    /// Print the effective configuration
    Show,
}
