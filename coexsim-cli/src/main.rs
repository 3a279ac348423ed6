//! coexsim antenna pattern tool
//!
//! Samples an antenna envelope over a range of off-axis angles and prints the
//! curve as CSV, for comparison against the published reference figure.

mod sweep;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use coexsim_antenna::create_antenna;
use coexsim_common::{init_logging, AntennaConfig, LogLevel};
use tracing::info;

use sweep::{print_pattern_csv, Sweep};

#[derive(Parser, Debug)]
#[command(name = "antenna-pattern")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Peak (boresight) gain in dBi
    #[arg(
        short = 'g',
        long = "peak-gain",
        value_name = "DB",
        default_value_t = 50.0,
        allow_negative_numbers = true
    )]
    pub peak_gain: f64,

    /// YAML antenna configuration, takes precedence over --peak-gain
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// First off-axis angle in degrees
    #[arg(long = "start", default_value_t = 0.1, allow_negative_numbers = true)]
    pub start_deg: f64,

    /// Last off-axis angle in degrees
    #[arg(long = "stop", default_value_t = 179.0, allow_negative_numbers = true)]
    pub stop_deg: f64,

    /// Number of samples
    #[arg(short = 'n', long = "num", default_value_t = 100_000)]
    pub num: usize,

    /// Print absolute gain instead of gain relative to G_m
    #[arg(short = 'a', long = "absolute")]
    pub absolute: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "log-level", default_value = "warn")]
    pub log_level: LogLevel,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level);

    let config = load_config(&args)?;
    let antenna = create_antenna(&config).context("Failed to build antenna pattern")?;

    let sweep = Sweep {
        start_deg: args.start_deg,
        stop_deg: args.stop_deg,
        num: args.num,
    };
    let rows = print_pattern_csv(antenna.as_ref(), &sweep, args.absolute)
        .context("Failed to write antenna pattern")?;

    info!("Wrote {} samples of '{}'", rows, antenna.name());
    Ok(())
}

fn load_config(args: &Args) -> Result<AntennaConfig> {
    let config = match &args.config {
        Some(path) => AntennaConfig::from_yaml_file(path).with_context(|| {
            format!("Failed to load antenna configuration {}", path.display())
        })?,
        None => AntennaConfig::rs1861_fig9c(args.peak_gain),
    };
    config.validate().context("Invalid antenna configuration")?;
    Ok(config)
}
