//! Argproto CLI - inspect and check calls against overloaded prototypes
//!
//! This is the main entry point for the `argproto` binary. It wires the
//! configuration, logging and output layers around the demo registry.

mod cli;
mod config;
mod demo;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands, OutputFormat};
use colored::control;
use config::{Config, SkippedConfig};
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::{instrument, warn};

fn main() {
    let cli = Cli::parse_args();

    // Loaded before logging: the [logging] section configures the subscriber
    let (config, skipped) = match Config::load_with_file(cli.config.as_deref()) {
        Ok((config, skipped)) => (Ok(config), skipped),
        Err(e) => (Err(e), Vec::new()),
    };

    let use_color = color_enabled(&cli, config.as_ref().ok());
    control::set_override(use_color);

    let settings = logging_config(&cli, config.as_ref().ok(), use_color);
    let logging_ready = match logging::init_logging(settings) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            false
        }
    };
    report_skipped(&skipped, logging_ready);

    let result = config.and_then(|config| run(cli, config));

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", error::format_error(&e, use_color));

            if e.should_show_help() {
                eprintln!("\nFor more information, try '--help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn run(cli: Cli, config: Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let format = match cli.output {
        Some(format) => format,
        None => OutputFormat::from_name(&config.output.format).ok_or_else(|| {
            error::Error::config(format!("Unknown output format '{}'", config.output.format))
        })?,
    };
    let use_color = cli.use_color() && config.output.color;
    let mut output = OutputWriter::new(format, use_color, cli.quiet);

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    let registry = demo::registry();

    match cli.command {
        Commands::Signatures(args) => handlers::handle_signatures(args, &registry, &mut output),
        Commands::Check(args) => handlers::handle_check(args, &registry, &mut output),
        Commands::Batch(args) => handlers::handle_batch(args, &config, &registry, &mut output),
        Commands::Config(args) => handlers::handle_config(args, &config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Whether stdout and log output may be colored
fn color_enabled(cli: &Cli, config: Option<&Config>) -> bool {
    cli.use_color() && config.map(|c| c.output.color).unwrap_or(true)
}

/// Report default config files that were passed over while loading
fn report_skipped(skipped: &[SkippedConfig], logging_ready: bool) {
    for skipped in skipped {
        if logging_ready {
            warn!(
                path = %skipped.path.display(),
                error = %skipped.error,
                "Skipped unreadable config file"
            );
        } else {
            eprintln!(
                "Warning: Skipped unreadable config file {}: {}",
                skipped.path.display(),
                skipped.error
            );
        }
    }
}

/// Logging settings from verbosity, the config file and the environment
fn logging_config(cli: &Cli, config: Option<&Config>, use_color: bool) -> LoggingConfig {
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());
    logging_config.ansi = use_color;

    if let Some(config) = config {
        logging_config.merge_with_file(&config.logging, cli.verbosity_level());
    }

    logging_config.merge_with_env();

    // Quiet mode only logs errors
    if cli.quiet {
        logging_config.level = "error".to_string();
    }

    logging_config
}
