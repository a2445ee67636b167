use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;

use super::{date_or_today, print_json};
use crate::domain::metadata::MetadataRecord;
use crate::infrastructure::client::{ApodClient, ClientConfig};

#[derive(Debug, Args)]
pub struct InfoCommand {
    /// Day to fetch (YYYY-MM-DD), defaults to today
    #[arg(long, env = "APOD_DATE")]
    pub date: Option<NaiveDate>,
}

#[derive(Serialize)]
struct InfoOutput<'a> {
    #[serde(flatten)]
    record: &'a MetadataRecord,
    media_url: Option<&'a str>,
}

pub async fn run(config: &ClientConfig, command: InfoCommand) -> Result<()> {
    let client = ApodClient::new(config)?;
    let record = client.fetch_metadata(date_or_today(command.date)).await?;

    print_json(&InfoOutput {
        record: &record,
        media_url: record.media_url(),
    })
}
