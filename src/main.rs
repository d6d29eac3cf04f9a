//! Makai Word Counter - Main entrypoint.
//!
//! This is the main entry point for the Makai word counter. It loads
//! configuration, initializes the logging system from the `[log]` section,
//! reads words from a file or standard input, and prints each distinct word
//! with its occurrence count in descending lexicographic order.

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

use makai_wc_lib::config::{self, LogConfig, MakaiConfig};
use makai_wc_lib::data_structures::HeluTrie;
use makai_wc_lib::error::{MakaiError, MakaiResult};
use makai_wc_lib::text;

/// Environment variable prefix for configuration overrides.
const ENV_PREFIX: &str = "MAKAI";

/// Command line arguments for the Makai word counter.
#[derive(Parser, Debug)]
#[clap(name = "Makai Word Counter", version, author, about)]
struct Args {
    /// Input file to count words from (standard input if omitted)
    #[clap(value_parser)]
    input: Option<PathBuf>,

    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Write the report to this file instead of standard output
    #[clap(short, long, value_parser)]
    output: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Count words and print the report
    Count,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Resolve the log filter: an explicit `RUST_LOG` wins, otherwise the
/// configured level applies.
fn log_filter(log: &LogConfig) -> EnvFilter {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directive) if !directive.is_empty() => EnvFilter::new(directive),
        _ => EnvFilter::new(&log.level),
    }
}

/// Initialize the logging system from the loaded configuration.
///
/// Logs go to stderr so the report stream stays clean.
fn init_logging(log: &LogConfig) -> MakaiResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(log_filter(log))
        .with_line_number(log.source_location)
        .with_file(log.source_location)
        .with_writer(io::stderr);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| MakaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Load the configuration for this invocation.
///
/// An explicit `--config` file must exist and parse; without one, the
/// default configuration file is used if present, built-in defaults
/// otherwise. Failures report straight to stderr since logging is not up
/// yet.
fn load_config(path: Option<&PathBuf>) -> MakaiConfig {
    let result = match path {
        Some(path) => config::ConfigLoader::new(Some(path), ENV_PREFIX).load(),
        None => config::load_default_config(),
    };

    match result {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    }
}

/// Count words from the selected input and write the report.
fn run_count(input: Option<&PathBuf>, output: Option<&PathBuf>) -> MakaiResult<()> {
    let config = config::get_global_config();
    let counter_config = &config.get().counter;

    let mut trie = HeluTrie::new();
    let total = match input {
        Some(path) => {
            let file = File::open(path).map_err(MakaiError::Io)?;
            text::count_words(BufReader::new(file), counter_config, &mut trie)?
        }
        None => text::count_words(io::stdin().lock(), counter_config, &mut trie)?,
    };

    let entries = trie.enumerate();
    info!(
        words = total,
        distinct = entries.len(),
        "Finished counting words"
    );

    match output {
        Some(path) => {
            let file = File::create(path).map_err(MakaiError::Io)?;
            text::write_report(BufWriter::new(file), &entries, counter_config.min_count)?;
        }
        None => {
            let stdout = io::stdout();
            text::write_report(stdout.lock(), &entries, counter_config.min_count)?;
        }
    }

    Ok(())
}

/// Main entry point for the application.
fn main() -> MakaiResult<()> {
    // Parse command-line arguments
    let args = <Args as clap::Parser>::parse();

    // Load and validate configuration, then bring up logging from its
    // [log] section
    let config = load_config(args.config.as_ref());
    init_logging(&config.log)?;
    config::init_global_config(config);

    match args.command.unwrap_or(Command::Count) {
        Command::Count => run_count(args.input.as_ref(), args.output.as_ref()),
        Command::Validate => {
            // Loading above already validated the configuration; an invalid
            // file has exited with an error by this point
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = MakaiConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(MakaiError::Io)?;
            }

            // Serialize to TOML
            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| MakaiError::Custom(format!("Failed to serialize config: {e}")))?;

            // Write to file
            std::fs::write(&output, toml).map_err(MakaiError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
