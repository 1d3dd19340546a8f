//! Strokesense: stroke risk assessment
//!
//! Reads a patient form as JSON from a file argument (or stdin), prints the
//! assessment report as JSON on stdout.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use strokesense::adapters::sanitize::SanitizingMakeWriter;
use strokesense::adapters::{read_patient_form, write_report, AssessmentReport};
use strokesense::application::{AssessmentProgress, AssessmentService, AssessmentWorker};
use strokesense::config::{Config, LogMode};

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Stdout carries the report; logs go to stderr or a file.
    let (writer, _guard) = match config.log_mode {
        LogMode::File => {
            if let Some(parent) = config.log_file.parent() {
                // Best-effort: a missing directory surfaces as the open error below.
                let _ = std::fs::create_dir_all(parent);
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&config.log_file)
                .with_context(|| format!("Failed to open log file {:?}", config.log_file))?;
            tracing_appender::non_blocking(file)
        }
        LogMode::Stderr => tracing_appender::non_blocking(io::stderr()),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(SanitizingMakeWriter::new(writer)),
        )
        .init();

    let input: Box<dyn Read> = match std::env::args().nth(1) {
        Some(path) if path != "-" => Box::new(BufReader::new(
            File::open(&path).with_context(|| format!("Failed to open patient form {path}"))?,
        )),
        _ => Box::new(io::stdin().lock()),
    };

    let form = read_patient_form(input)?;
    let profile = form.to_profile();

    let service = Arc::new(AssessmentService::from_config(&config));
    let assessment = AssessmentWorker::spawn(service, profile.clone()).wait_with(|progress| {
        if matches!(progress, AssessmentProgress::Processing) {
            tracing::info!("Assessing stroke risk...");
        }
    })?;

    write_report(io::stdout().lock(), &AssessmentReport::new(&profile, assessment))?;
    Ok(())
}
