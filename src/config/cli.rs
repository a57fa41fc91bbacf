use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "bikeshare")]
#[command(about = "Explore US bikeshare trip data interactively")]
pub struct CliConfig {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write diagnostics as JSON lines")]
    pub log_json: bool,

    #[arg(long, help = "Log process CPU and memory usage")]
    pub monitor: bool,
}
