use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use sheet_links::app::generate_use_case::{GenerateReport, GenerateUseCase};
use sheet_links::config::Settings;
use sheet_links::error::LinksError;
use sheet_links::infra::http_client::ReqwestHttp;
use sheet_links::logging;
use sheet_links::types::Layout;

#[derive(Parser)]
#[command(name = "sheet_links")]
#[command(about = "Render a published Google Sheets link list into a searchable HTML page")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    overrides: Overrides,
}

#[derive(Subcommand)]
enum Commands {
    /// One flat table with every sheet row (default)
    Table,
    /// One collapsible section per category, with category filter buttons
    Grouped,
}

#[derive(Args)]
struct Overrides {
    /// TOML settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// CSV export URL to fetch
    #[arg(long, global = true)]
    url: Option<String>,
    /// Output HTML file
    #[arg(long, global = true)]
    output: Option<PathBuf>,
    /// Also write JSON logs to this directory (daily rotation)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

fn load_settings(overrides: &Overrides, layout: Layout) -> anyhow::Result<Settings> {
    let mut settings = Settings::load(overrides.config.as_deref()).context("loading settings")?;
    if let Some(url) = &overrides.url {
        settings.sheet_url = url.clone();
    }
    if let Some(output) = &overrides.output {
        match layout {
            Layout::Table => settings.table_output = output.clone(),
            Layout::Grouped => settings.grouped_output = output.clone(),
        }
    }
    if overrides.log_dir.is_some() {
        settings.log_dir = overrides.log_dir.clone();
    }
    settings.validate().context("validating settings")?;
    Ok(settings)
}

fn run(settings: Settings, layout: Layout) -> anyhow::Result<GenerateReport> {
    let http = ReqwestHttp::new(settings.timeout()).context("building HTTP client")?;
    let use_case = GenerateUseCase::new(Box::new(http), settings);
    let report = use_case
        .run(layout)
        .with_context(|| format!("generating {} page", layout.as_str()))?;
    Ok(report)
}

fn report_failure(e: &anyhow::Error) {
    let stage = e
        .chain()
        .find_map(|cause| cause.downcast_ref::<LinksError>())
        .map(LinksError::stage)
        .unwrap_or("setup");
    error!(stage, "Run failed: {:#}", e);
    println!("❌ Failed ({stage}): {e:#}");
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let layout = match cli.command {
        Some(Commands::Grouped) => Layout::Grouped,
        Some(Commands::Table) | None => Layout::Table,
    };

    let settings = load_settings(&cli.overrides, layout);
    let log_dir = match &settings {
        Ok(settings) => settings.log_dir.clone(),
        Err(_) => cli.overrides.log_dir.clone(),
    };
    let _log_guard = logging::init_logging(log_dir.as_deref());

    let result = settings.and_then(|settings| {
        println!("🔄 Fetching sheet data...");
        run(settings, layout)
    });

    match result {
        Ok(report) => {
            info!(
                layout = report.layout.as_str(),
                items = report.items,
                categories = report.categories,
                bytes = report.bytes,
                "Run finished"
            );
            match report.layout {
                Layout::Table => println!("   Rows: {}", report.items),
                Layout::Grouped => println!(
                    "   Records: {} in {} categories",
                    report.items, report.categories
                ),
            }
            println!("✅ Generated {}", report.output_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_failure(&e);
            ExitCode::FAILURE
        }
    }
}
