//! Roster compliance scanner
//!
//! Reads an employee roster CSV, rebuilds the management hierarchy, and
//! prints salary band and reporting line violations.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use compliance_engine::{roster, ComplianceEngine, Policy};
use shared_types::ComplianceReport;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "roster-scan")]
#[command(
    version,
    about = "Check an employee roster for salary band and reporting line violations"
)]
struct Args {
    /// Roster CSV: id,first_name,last_name,salary,manager_id (no header row)
    roster: PathBuf,

    /// TOML file overriding the default policy thresholds
    #[arg(short, long)]
    policy: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One finding per line under section headers
    Text,
    /// The full report as JSON
    Json,
}

fn run(args: &Args) -> anyhow::Result<ComplianceReport> {
    let policy = match &args.policy {
        Some(path) => Policy::from_file(path)?,
        None => Policy::default(),
    };
    let engine = ComplianceEngine::new(policy);
    tracing::debug!(policy = ?engine.policy(), "Policy loaded");

    let hierarchy = roster::load(&args.roster, engine.policy())?;
    let report = engine
        .check(&hierarchy)
        .with_context(|| format!("Compliance check failed for {}", args.roster.display()))?;

    Ok(report)
}

fn print_report(report: &ComplianceReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for line in report.lines() {
                println!("{}", line);
            }
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(report).context("Failed to serialize report")?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the report; RUST_LOG overrides the warn default
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting roster-scan v{}", env!("CARGO_PKG_VERSION"));

    let outcome = run(&args).and_then(|report| print_report(&report, args.format));

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error processing file: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
