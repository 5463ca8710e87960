use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use helios_riseset::ZenithKind;
use helios_time::CalendarDate;

/// Sunrise, sunset and twilight times in UTC.
#[derive(Parser)]
#[command(name = "helios", version, about = "Approximate sunrise/sunset calculator")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv per-stage trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet: only results and errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sunrise and sunset for a latitude/longitude
    At(AtArgs),
    /// Sunrise and sunset for a named preset location
    Preset(PresetArgs),
    /// List available preset locations
    Presets {
        /// TOML file with extra presets
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Date and zenith shared by the reporting subcommands.
#[derive(Args)]
pub struct EventArgs {
    /// Date as YYYYMMDD or YYYY-MM-DD (default: today, UTC)
    #[arg(long)]
    pub date: Option<CalendarDate>,

    /// official, civil, nautical or astronomical
    #[arg(long, default_value = "official")]
    pub zenith: ZenithKind,
}

#[derive(Args)]
pub struct AtArgs {
    /// Latitude in degrees, north positive [-90, 90]
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: f64,

    /// Longitude in degrees, east positive [-180, 180]
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: f64,

    #[command(flatten)]
    pub event: EventArgs,
}

#[derive(Args)]
pub struct PresetArgs {
    /// Preset name (case-insensitive)
    pub name: String,

    /// TOML file with extra presets
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub event: EventArgs,
}
