//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Modes
//!
//! - `kraken` - Interactive session on stdin/stdout
//! - `kraken -c <LINE>...` - Run the given lines, then exit
//! - `kraken <SCRIPT>` - Run each line of a file, then exit
//!
//! # Global Flags
//!
//! - `--config <path>`: Read this config file instead of searching
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: No banner
//! - `--prompt <text>` / `--no-prompt`: Override the prompt settings

use clap::Parser;
use std::path::PathBuf;

/// Kraken - interactive `<alias>.<verb>` command console
#[derive(Parser, Debug)]
#[command(name = "kraken")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
EXAMPLES:
    # Start an interactive session
    kraken

    # Run commands and exit
    kraken -c core.aliases -c 'core.echo \"hello world\"'

    # Run a script file (blank lines and lines starting with # are skipped)
    kraken setup.krk")]
pub struct Cli {
    /// Read configuration from this file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Don't print the banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Prompt text printed after each command
    #[arg(long, value_name = "TEXT", conflicts_with = "no_prompt")]
    pub prompt: Option<String>,

    /// Never print the prompt
    #[arg(long)]
    pub no_prompt: bool,

    /// Command line to run; may be repeated
    #[arg(short = 'c', long = "command", value_name = "LINE", conflicts_with = "script")]
    pub commands: Vec<String>,

    /// Script file with one command per line
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// True when no lines were given up front and stdin drives the session.
    pub fn interactive(&self) -> bool {
        self.commands.is_empty() && self.script.is_none()
    }
}
