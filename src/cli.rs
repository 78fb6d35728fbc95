//! Command-line arguments

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::commands::export::{ExportOptions, DEFAULT_BASE_NAME};

/// Back up a YouTube playlist into CSV and txt files
#[derive(Parser, Debug, Clone)]
#[command(name = "playlist-exporter", author, version, about, long_about = None)]
pub struct Args {
    /// ID of the YouTube playlist (a playlist URL also works). `-pl` is accepted too
    #[arg(
        short = 'p',
        long = "playlist_id",
        visible_alias = "playlist-id",
        value_name = "ID"
    )]
    pub playlist_id: String,

    /// Base name for generated files
    #[arg(short, long, default_value = DEFAULT_BASE_NAME, allow_hyphen_values = true)]
    pub name: PathBuf,

    /// Seconds to wait once, after listing the playlist and before writing files
    #[arg(short, long, default_value_t = 0)]
    pub wait: u64,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Parse the process arguments, accepting the two-letter `-pl` flag
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn try_parse_normalized_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args.into_iter().map(Into::into)))
    }

    pub fn export_options(&self) -> ExportOptions {
        let mut options = ExportOptions::new(self.playlist_id.clone());
        options.base_name = self.name.clone();
        options.wait_seconds = self.wait;
        options
    }
}

/// Options whose value is the following argument
const VALUE_OPTIONS: &[&str] = &[
    "-p",
    "--playlist_id",
    "--playlist-id",
    "-n",
    "--name",
    "-w",
    "--wait",
    "-c",
    "--config",
];

/// Rewrite `-pl` / `-pl=<id>` to `--playlist_id`.
///
/// clap shorts are single characters, and left alone `-pl` would parse as
/// `-p` with the value `l`. An `-pl` that is the value of the preceding
/// option, or that follows `--`, is left untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    let mut expects_value = false;
    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if expects_value {
                expects_value = false;
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    arg
                }
                Some("-pl") => {
                    expects_value = true;
                    OsString::from("--playlist_id")
                }
                Some(value) if value.starts_with("-pl=") => {
                    OsString::from(format!("--playlist_id={}", &value[4..]))
                }
                Some(value) => {
                    expects_value = VALUE_OPTIONS.contains(&value);
                    arg
                }
                None => arg,
            }
        })
        .collect()
}
