// Month Grid
// Command-line entry point: lays out a month and prints it as JSON

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::Parser;

use month_grid::models::settings::TimeFormat;
use month_grid::services::event::load_events;
use month_grid::services::settings::SettingsService;
use month_grid::LayoutEngine;

#[derive(Parser, Debug)]
#[command(
    name = "month-grid",
    version,
    about = "Lay out calendar events on a month grid"
)]
struct Cli {
    /// JSON file holding the event list
    #[arg(short, long)]
    events: PathBuf,

    /// Month to display, zero-based (0 = January); defaults to this month
    #[arg(short, long, allow_hyphen_values = true)]
    month: Option<i32>,

    /// Year to display; defaults to this year
    #[arg(short, long)]
    year: Option<i32>,

    /// Config file (defaults to the per-user config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the first day of the week (0 = Sunday .. 6 = Saturday)
    #[arg(long)]
    first_day_of_week: Option<u8>,

    /// Override the clock style for timed events (12h or 24h)
    #[arg(long)]
    time_format: Option<TimeFormat>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() {
    // Initialize logging
    env_logger::init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    log::info!("Starting month-grid");

    let settings = SettingsService::new(cli.config)
        .load()?
        .with_overrides(cli.first_day_of_week, cli.time_format);

    let today = Local::now().date_naive();
    let month = cli.month.unwrap_or(today.month0() as i32);
    let year = cli.year.unwrap_or(today.year());

    let events = load_events(&cli.events)?;
    let engine = LayoutEngine::new(&settings).context("Invalid layout settings")?;
    let layout = engine.layout_month(&events, month, year)?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&layout)?
    } else {
        serde_json::to_string(&layout)?
    };
    println!("{output}");

    log::info!(
        "Rendered {}-{:02}: {} weeks, {} bars",
        layout.year,
        layout.month + 1,
        layout.weeks.len(),
        layout.run_count()
    );
    Ok(())
}
