use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::infrastructure::client::{ApodClient, ClientConfig};
use crate::infrastructure::storage::save_image;

#[derive(Debug, Args)]
pub struct DownloadCommand {
    /// Image URL to download
    pub url: String,

    /// File to write the downloaded bytes to
    #[arg(long)]
    pub output: PathBuf,
}

pub async fn run(config: &ClientConfig, command: DownloadCommand) -> Result<()> {
    let client = ApodClient::new(config)?;
    let bytes = client.fetch_bytes(&command.url).await?;
    save_image(&bytes, &command.output).await?;
    Ok(())
}
