//! Phone Book - Main entry point
//!
//! Runs the interactive menu on stdin/stdout. Logs go to stderr and to a
//! rotating audit file.

use anyhow::{Context, Result};
use clap::Parser;
use phone_book::observability::{audit_appender, audit_layer};
use phone_book::{Config, ContactPrinter, MetricsTracker, PhoneBook, PhoneBookController};
use std::io;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Interactive command-line contact manager.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// CSV file to seed contacts from (overrides PHONEBOOK_CONTACTS_FILE)
    #[arg(long)]
    contacts_file: Option<PathBuf>,

    /// Width of printed table columns (overrides PHONEBOOK_COLUMN_WIDTH)
    #[arg(long)]
    column_width: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    if let Some(path) = args.contacts_file {
        config.contacts_file = Some(path);
    }
    if let Some(width) = args.column_width {
        config.column_width = width;
    }
    config.validate()?;

    // Initialize logging (stderr plus audit file, stdout carries the menu)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let (audit_writer, _audit_guard) = match audit_appender(&config.log_dir) {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        Err(e) => {
            eprintln!(
                "Audit log disabled, cannot write to {}: {}",
                config.log_dir.display(),
                e
            );
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_filter(filter))
        .with(audit_writer.map(audit_layer))
        .init();

    info!(column_width = config.column_width, "Configuration loaded successfully");

    let metrics = MetricsTracker::new();
    let phone_book = match &config.contacts_file {
        Some(path) => PhoneBook::from_csv(path)
            .map_err(|e| {
                error!(path = %path.display(), error = %e, "Failed to load contacts");
                e
            })
            .with_context(|| format!("loading contacts from {}", path.display()))?,
        None => PhoneBook::new(),
    }
    .with_metrics(metrics.clone());

    let stdin = io::stdin();
    let mut controller = PhoneBookController::new(phone_book, stdin.lock(), io::stdout())
        .with_printer(ContactPrinter::new(config.column_width));
    controller.run()?;

    info!("{}", metrics.summary());
    Ok(())
}
