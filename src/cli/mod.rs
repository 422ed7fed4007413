//! cli
//!
//! Command-line front end for the `kraken` binary.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install the tracing subscriber
//! - Load configuration and build the registry
//! - Feed lines from `-c`, a script file or stdin to an [`Interpreter`]
//!
//! # Architecture
//!
//! The CLI layer is a transport. It owns stdin/stdout and hands the
//! interpreter a [`WriterContext`]; all command semantics live in
//! [`crate::engine`].

pub mod args;

pub use args::Cli;

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use tracing_subscriber::EnvFilter;

use crate::builtins;
use crate::core::config::Config;
use crate::engine::{ExecutionContext, Interpreter, Prompt, Session, WriterContext};
use crate::registry::{CommandRegistry, InMemoryRegistry};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(path) = config.loaded_from() {
        tracing::debug!("loaded config from {}", path.display());
    }

    let registry = Arc::new(InMemoryRegistry::new());
    builtins::register_builtins(&registry).context("failed to register built-in commands")?;

    let stdout = io::stdout();
    let mut ctx = WriterContext::new(stdout.lock());
    run_with(&cli, &config, registry, &mut ctx)
}

/// Run the mode selected by `cli` against `registry`, printing to `ctx`.
pub fn run_with<W: Write>(
    cli: &Cli,
    config: &Config,
    registry: Arc<dyn CommandRegistry>,
    ctx: &mut WriterContext<W>,
) -> Result<()> {
    let mut interpreter = Interpreter::new(registry, session_for(cli, config));

    if let Some(script) = &cli.script {
        let lines = read_script(script)?;
        run_lines(&mut interpreter, lines.iter().map(String::as_str), ctx);
    } else if !cli.commands.is_empty() {
        run_lines(&mut interpreter, cli.commands.iter().map(String::as_str), ctx);
    } else {
        if !cli.quiet {
            ctx.println(config.banner());
        }
        let stdin = io::stdin();
        interpreter
            .run(stdin.lock(), ctx)
            .context("failed to read from stdin")?;
        // Leave the terminal on a fresh line after the final prompt
        if interpreter.session().prompt().enabled {
            ctx.println("");
        }
    }

    Ok(())
}

/// Build session settings: CLI flags override config values.
///
/// Non-interactive modes never print a prompt.
pub fn session_for(cli: &Cli, config: &Config) -> Session {
    let text = cli
        .prompt
        .clone()
        .unwrap_or_else(|| config.prompt().to_string());
    let enabled = cli.interactive() && !cli.no_prompt && config.prompt_enabled();
    Session::new(Prompt { text, enabled })
}

/// Read a script file, dropping blank lines and `#` comments.
pub fn read_script(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read script '{}'", path.display()))?;
    Ok(script_lines(&contents))
}

fn script_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn run_lines<'a>(
    interpreter: &mut Interpreter,
    lines: impl Iterator<Item = &'a str>,
    ctx: &mut dyn ExecutionContext,
) {
    for line in lines {
        if ctx.is_closed() {
            break;
        }
        interpreter.run_line(line, ctx);
    }
}

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` wins unless `--debug` is given; the default level is `warn`.
fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Ignore failure if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
