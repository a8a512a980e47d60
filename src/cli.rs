use clap::Parser;
use datacert::application::dto::OutputFormat;
use datacert::certification::domain::RiskBand;
use std::path::PathBuf;

/// Issue a verification certificate for a folder of dataset files
#[derive(Parser, Debug)]
#[command(name = "datacert")]
#[command(version)]
#[command(
    about = "Fingerprint a dataset folder, score its risk and issue a verification certificate",
    long_about = None
)]
pub struct Args {
    /// Dataset folder to certify
    #[arg(short, long, value_name = "DIR")]
    pub input: PathBuf,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write the Markdown certificate to this file
    #[arg(short, long, value_name = "FILE")]
    pub certificate: Option<PathBuf>,

    /// Exclude files matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "*.tmp" -e "scratch/*"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Seed for reproducible risk checks
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Exit with code 1 when the dataset risk band is at least this severe
    /// (LOW, GUARDED, MEDIUM, HIGH, CRITICAL)
    #[arg(long, value_name = "BAND")]
    pub fail_on: Option<RiskBand>,

    /// Path to a config file (defaults to datacert.config.yml in the dataset folder)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
