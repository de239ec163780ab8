use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

mod cli;

use barlog::config::Config;
use barlog::event::EventKind;
use barlog::{parser, report, scan};
use cli::Cli;
use cli::commands::Commands;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("barlog")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("barlog.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Analyze { root, output, json } => {
            handle_analyze_command(root, output.as_deref(), *json, config)
        }
        Commands::Events { file } => handle_events_command(file),
    }
}

fn handle_analyze_command(
    root: &Path,
    output: Option<&Path>,
    json: bool,
    config: &Config,
) -> Result<()> {
    info!("Analyzing logs under {}", root.display());
    let start = Instant::now();

    let summary = scan::analyze_dir(root, config)
        .context(format!("Failed to analyze {}", root.display()))?;

    if json {
        println!("{}", report::to_json(&summary)?);
    } else {
        report::print_summary(&summary);
    }

    if let Some(path) = output {
        report::write_csv(&summary, path)
            .context(format!("Failed to write CSV to {}", path.display()))?;
        println!(
            "{} {}",
            "CSV file of log stats saved at:".green(),
            path.display()
        );
    }

    println!("Ran in {} seconds", start.elapsed().as_secs());
    Ok(())
}

fn handle_events_command(file: &Path) -> Result<()> {
    info!("Inspecting events in {}", file.display());

    let contents =
        fs::read_to_string(file).context(format!("Failed to read {}", file.display()))?;
    let parsed = parser::parse(&contents);

    for failure in &parsed.failures {
        println!(
            "{} line {}",
            "Unparseable:".red(),
            failure.line_index()
        );
    }
    for line in &parsed.lines {
        let kind = if line.kind == EventKind::Unknown {
            line.kind.label().red()
        } else {
            line.kind.label().cyan()
        };
        match &line.detail {
            Some(detail) => println!("{:>6}  {}  {} ({})", line.line_index, line.timestamp, kind, detail),
            None => println!("{:>6}  {}  {}", line.line_index, line.timestamp, kind),
        }
    }
    println!("{} events", parsed.lines.len());
    Ok(())
}

fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref())?;
    config.validate()?;

    run_application(&cli, &config)
}
