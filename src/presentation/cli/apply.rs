use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use tracing::info;

use super::{absolute_path, date_or_today, default_output_path};
use crate::application::Pipeline;
use crate::domain::background::BackgroundSetter;
use crate::infrastructure::client::{ApodClient, ClientConfig};
use crate::infrastructure::desktop::{KeepBackground, platform_setter};

#[derive(Debug, Args)]
pub struct ApplyCommand {
    /// Day to fetch (YYYY-MM-DD), defaults to today
    #[arg(long, env = "APOD_DATE")]
    pub date: Option<NaiveDate>,

    /// Where to save the image, defaults to apod.jpg in the temp directory
    #[arg(long, env = "APOD_OUTPUT_PATH")]
    pub output: Option<PathBuf>,

    /// Save the image without changing the desktop background
    #[arg(long)]
    pub save_only: bool,
}

pub async fn run(config: &ClientConfig, command: ApplyCommand) -> Result<()> {
    let date = date_or_today(command.date);
    let output = absolute_path(&command.output.unwrap_or_else(default_output_path))?;

    let background: Arc<dyn BackgroundSetter> = if command.save_only {
        Arc::new(KeepBackground)
    } else {
        platform_setter()
    };

    let pipeline = Pipeline::new(ApodClient::new(config)?, background);
    let applied = pipeline.run(date, &output).await?;

    info!(
        date = %date,
        title = %applied.record.title,
        url = %applied.media_url,
        path = %applied.path.display(),
        "APOD applied"
    );
    Ok(())
}
