use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use mate_core::OutputFormat;

/// Command line for the `mate` binary.
#[derive(Debug, Parser)]
#[command(name = "mate")]
#[command(about = "Mp3-Mate: turn a YouTube link into MP3/MP4 download links", long_about = None)]
pub struct Cli {
    /// Link to convert once and exit. Omit to start the interactive prompt.
    pub url: Option<String>,

    /// Output format selected at startup.
    #[arg(long, value_enum, default_value_t = FormatArg::Mp3)]
    pub format: FormatArg,

    /// Conversion service endpoint; overrides the config file.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Path to the RON config file.
    #[arg(long, value_name = "PATH", default_value = "mate.ron")]
    pub config: PathBuf,

    /// Log level (off, error, warn, info, debug, trace); overrides the config file.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Mp3,
    Mp4,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Mp3 => OutputFormat::Mp3,
            FormatArg::Mp4 => OutputFormat::Mp4,
        }
    }
}
