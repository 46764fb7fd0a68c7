#![forbid(unsafe_code)]

mod config;
mod constants;
mod ini;
mod store;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use tracing::{Level as TraceLevel, info, warn};
use tracing_subscriber::FmtSubscriber;

use config::defaults::{all_field_names, field_names, is_documented};
use config::{ConfigRecord, FieldGroup};
use ini::overrides::derived_fields;
use store::{Action, AppState};

/// Export settings-editor form state as the automation program's config file
#[derive(Debug, Parser)]
#[command(name = "kca-config", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read a JSON form record on stdin and write the config file to stdout
    Export {
        /// Export the record as given instead of filling missing fields with defaults
        #[arg(long)]
        no_defaults: bool,
    },
    /// Print the default form record as JSON
    Defaults,
    /// List the documented form fields
    Fields {
        #[arg(long, value_enum)]
        group: Option<FieldGroup>,
    },
}

fn init_logging() -> Result<()> {
    // Parse log level from environment variable
    let log_level = match std::env::var(constants::env::LOG_LEVEL)
        .unwrap_or_else(|_| constants::env::DEFAULT_LOG_LEVEL.to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    // stdout carries the exported file, logs go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;
    Ok(())
}

fn read_record(apply_defaults: bool) -> Result<ConfigRecord> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read form record from stdin")?;

    let record: ConfigRecord = serde_json::from_str(&input)
        .context("Failed to parse form record: expected a JSON object")?;

    let derived: Vec<_> = derived_fields().collect();
    for (name, _) in record.iter() {
        if !is_documented(name) && !derived.iter().any(|field| *field == name) {
            warn!(field = %name, "undocumented field will not be exported");
        }
    }

    Ok(if apply_defaults {
        ConfigRecord::with_defaults(record)
    } else {
        record
    })
}

fn export(apply_defaults: bool) -> Result<()> {
    let record = read_record(apply_defaults)?;
    info!(fields = record.len(), defaults = apply_defaults, "loaded form record");

    let mut state = AppState::new();
    state.dispatch(Action::SetJsonConfig(record));
    let mut stdout = io::stdout().lock();
    for line in state.export().lines() {
        writeln!(stdout, "{line}").context("Failed to write config to stdout")?;
    }
    stdout.flush().context("Failed to flush stdout")?;

    info!(lines = state.text_config.config().len(), "exported config");
    Ok(())
}

fn print_defaults() -> Result<()> {
    let json = serde_json::to_string_pretty(&ConfigRecord::default())
        .context("Failed to serialize default record to JSON")?;
    println!("{json}");
    Ok(())
}

fn print_fields(group: Option<FieldGroup>) {
    let names: Vec<&str> = match group {
        Some(group) => field_names(group).collect(),
        None => all_field_names().collect(),
    };
    for name in names {
        println!("{name}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    match cli.command {
        Command::Export { no_defaults } => export(!no_defaults),
        Command::Defaults => print_defaults(),
        Command::Fields { group } => {
            print_fields(group);
            Ok(())
        }
    }
}
