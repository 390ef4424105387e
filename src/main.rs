//! Lanai Table - Main entrypoint.
//!
//! Loads configuration, initializes logging and drives a Lanai Hash Table
//! with commands read from a script file or standard input.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use lanai_table_lib::config::{ConfigLoader, LanaiConfig, LogConfig, ENV_PREFIX};
use lanai_table_lib::driver::Driver;
use lanai_table_lib::error::{LanaiError, LanaiResult};
use tracing::info;

/// Command line arguments for the Lanai table binary.
#[derive(Parser, Debug)]
#[clap(name = "Lanai Table", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Apply table commands from a script, or from stdin when no script is given
    Run {
        /// Path to a file with one command per line
        #[clap(short, long, value_parser)]
        script: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so command output on stdout stays clean.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> LanaiResult<()> {
    let args = <Args as clap::Parser>::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = config_loader.load();

    // Fall back to default logging so configuration errors still get reported
    let default_log = LogConfig::default();
    init_logging(loaded.as_ref().map(|config| &config.log).unwrap_or(&default_log))?;

    match args.command.unwrap_or(Command::Run { script: None }) {
        Command::Run { script } => {
            let config = match loaded {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("Configuration error: {}", e);
                    process::exit(1);
                }
            };

            info!(
                "Table configured with capacity: {}, load factor: {}, hash: {:?}",
                config.table.initial_capacity, config.table.load_factor, config.table.hash_strategy
            );

            let mut driver = Driver::new(config.table)?;
            let output = io::stdout().lock();
            let applied = match script {
                Some(path) => driver.run(BufReader::new(File::open(&path)?), output)?,
                None => driver.run(io::stdin().lock(), output)?,
            };

            info!(
                applied,
                keys = driver.table().len(),
                capacity = driver.table().capacity(),
                "Run complete"
            );
            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration");
            match loaded {
                Ok(_) => {
                    info!("Configuration validated successfully");
                    Ok(())
                }
                Err(e) => {
                    tracing::error!("Configuration validation error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = LanaiConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| LanaiError::Custom(format!("Failed to serialize config: {e}")))?;

            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
