use clap::{Parser, ValueEnum};
use serp_rewrite::results::DeviceType;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "serp-rewrite")]
#[command(about = "Compare on-page titles and meta descriptions with how Google shows them")]
#[command(version)]
pub struct Args {
    /// CSV file with the URLs to analyze in its first column (first row is a header)
    pub input: PathBuf,

    /// Device the search results are requested for
    #[arg(short, long, value_enum)]
    pub device: Option<DeviceArg>,

    /// Maximum number of URLs to analyze
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Path to JSON configuration file
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,

    /// Directory the CSV report is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Print the report without writing the CSV file
    #[arg(long)]
    pub no_export: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DeviceArg {
    Mobile,
    Desktop,
}

/// Convert from CLI argument device to internal device type
pub fn convert_device(arg: DeviceArg) -> DeviceType {
    match arg {
        DeviceArg::Mobile => DeviceType::Mobile,
        DeviceArg::Desktop => DeviceType::Desktop,
    }
}
