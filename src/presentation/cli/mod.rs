pub mod apply;
pub mod download;
pub mod info;

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};

use apply::ApplyCommand;
use download::DownloadCommand;
use info::InfoCommand;

use crate::infrastructure::client::{APOD_URL, ClientConfig, DEMO_API_KEY};

const DEFAULT_FILE_NAME: &str = "apod.jpg";

#[derive(Debug, Parser)]
#[command(author, version, about = "Set NASA's Astronomy Picture of the Day as the desktop background", long_about = None)]
pub struct Cli {
    #[arg(long, global = true, env = "APOD_API_URL", default_value = APOD_URL)]
    pub api_url: String,

    #[arg(
        long,
        global = true,
        env = "APOD_API_KEY",
        default_value = DEMO_API_KEY,
        hide_env_values = true
    )]
    pub api_key: String,

    /// Timeout for each HTTP request, in seconds
    #[arg(
        long,
        global = true,
        env = "APOD_TIMEOUT_SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_url: self.api_url.clone(),
            api_key: self.api_key.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download the day's image, save it, and set it as the desktop background
    Apply(ApplyCommand),

    /// Print the day's metadata and resolved image link as JSON (stdout)
    Info(InfoCommand),

    /// Download an arbitrary image URL to a file
    Download(DownloadCommand),
}

/// The date to fetch, defaulting to today (UTC).
pub fn date_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Utc::now().date_naive())
}

pub fn default_output_path() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_FILE_NAME)
}

/// Make `path` absolute against the current directory. The Windows
/// wallpaper call ignores relative paths.
pub fn absolute_path(path: &Path) -> anyhow::Result<PathBuf> {
    Ok(std::path::absolute(path)?)
}

pub(crate) fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
