//! Manu Filter - Main entrypoint.
//!
//! Command-line front end for the cuckoo filter. It loads configuration,
//! initializes the logging system, and runs the selected subcommand.

use clap::{Parser, Subcommand};
use manu_filter_lib::config::{self, ConfigLoader, LogConfig, ManuConfig};
use manu_filter_lib::error::{ManuError, ManuResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command line arguments for the Manu filter tool.
#[derive(Parser, Debug)]
#[clap(name = "Manu Filter", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Insert every line of a keys file, then probe another file
    Check {
        /// File with one key per line to insert
        #[clap(short, long, value_parser)]
        keys: PathBuf,

        /// File with one key per line to look up after loading
        #[clap(short, long, value_parser)]
        probes: Option<PathBuf>,
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
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> ManuResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| ManuError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Call `f` with every line of `path`.
fn for_each_line(path: &Path, mut f: impl FnMut(&str)) -> ManuResult<()> {
    let reader = BufReader::new(File::open(path)?);
    for line in reader.lines() {
        f(&line?);
    }
    Ok(())
}

/// Load keys into a filter and report how the probe set answers.
fn run_check(config: &ManuConfig, keys: &Path, probes: Option<&Path>) -> ManuResult<()> {
    let mut filter = config.filter.build_filter();
    info!(
        bucket_count = filter.bucket_count(),
        slot_capacity = filter.slot_capacity(),
        "Filter created"
    );

    let mut rejected = 0usize;
    for_each_line(keys, |key| {
        if let Err(e) = filter.insert(key.as_bytes()) {
            warn!(key, error = %e, "Key not admitted");
            rejected += 1;
        }
    })?;
    info!(
        count = filter.count(),
        rejected,
        load_factor = filter.load_factor(),
        "Keys loaded"
    );

    if let Some(probes) = probes {
        let mut total = 0usize;
        let mut positives = 0usize;
        for_each_line(probes, |probe| {
            total += 1;
            if filter.lookup(probe.as_bytes()) {
                positives += 1;
            }
        })?;

        let rate = if total == 0 { 0.0 } else { positives as f64 / total as f64 };
        info!(total, positives, positive_rate = rate, "Probes checked");
    }

    Ok(())
}

/// Main entry point for the application.
fn main() -> ManuResult<()> {
    let args = <Args as clap::Parser>::parse();

    if let Command::GenConfig { output } = &args.command {
        let default_config = ManuConfig::default();

        // Create parent directories if they don't exist
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(&default_config)
            .map_err(|e| ManuError::Custom(format!("Failed to serialize config: {e}")))?;
        std::fs::write(output, toml)?;

        println!("Default configuration written to {}", output.display());
        return Ok(());
    }

    let loaded = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX).load()?;
    init_logging(&loaded.log)?;
    info!(version = manu_filter_lib::VERSION, "Starting Manu filter");

    match args.command {
        Command::Check { keys, probes } => run_check(&loaded, &keys, probes.as_deref()),
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { .. } => Ok(()),
    }
}
