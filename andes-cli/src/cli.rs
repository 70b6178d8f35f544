use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "andes-seat",
    about = "Assign seats to a flight's passengers from a manifest snapshot",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Seat every passenger of a flight that has no seat yet
    Allocate {
        /// Flight to seat
        flight_id: i64,

        /// Manifest snapshot (defaults to `manifest.path` from config)
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Directory holding default.toml and friends
        #[arg(long)]
        config_dir: Option<PathBuf>,

        /// Print the run report alongside the flight and its passengers
        #[arg(long)]
        report: bool,
    },
}
