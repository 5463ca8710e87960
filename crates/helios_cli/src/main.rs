mod cli;
mod config;
mod logging;
mod report;

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use helios_riseset::Location;
use helios_time::CalendarDate;

use crate::cli::{AtArgs, Cli, Command, EventArgs, PresetArgs};
use crate::config::{PresetsConfig, all_presets, find_preset};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::At(args) => run_at(args),
        Command::Preset(args) => run_preset(args),
        Command::Presets { config } => run_presets(config.as_deref()),
    }
}

fn run_at(args: AtArgs) -> Result<()> {
    let location = Location::new(args.latitude, args.longitude)?;
    report_day(&report::coordinate_label(location), location, &args.event)
}

fn run_preset(args: PresetArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let preset = find_preset(&args.name, config.as_ref())?;
    tracing::info!(name = %preset.name, "using preset location");
    report_day(&preset.label, preset.location, &args.event)
}

fn run_presets(config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    for p in all_presets(config.as_ref())? {
        println!(
            "{:12} {:>9.4} {:>10.4}  {}",
            p.name,
            p.location.latitude_deg(),
            p.location.longitude_deg(),
            p.label
        );
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Option<PresetsConfig>> {
    path.map(PresetsConfig::load).transpose()
}

fn report_day(label: &str, location: Location, event: &EventArgs) -> Result<()> {
    let date = match event.date {
        Some(d) => d,
        None => today_utc()?,
    };
    let outcome = report::compute_day(location, date, event.zenith)?;
    for line in report::render(label, date, &outcome) {
        println!("{line}");
    }
    Ok(())
}

fn today_utc() -> Result<CalendarDate> {
    let today = chrono::Utc::now().date_naive();
    CalendarDate::new(today.year(), today.month(), today.day())
        .context("current date is outside the supported calendar")
}
