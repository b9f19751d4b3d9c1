//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Validates subdomain declarations and compiles them into DNS record operations.
#[derive(Debug, Parser)]
#[command(name = "subreg")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Configuration file (defaults to `subreg.toml` in the working directory, if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the declaration files (overrides `declarations.dir`)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// Log at DEBUG level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register every declaration and report the result
    Check,
    /// Register and compile every declaration, then print the commit plan as JSON
    Compile {
        /// Pretty-print the plan
        #[arg(long)]
        pretty: bool,
    },
}
