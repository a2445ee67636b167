use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::warn;

use crate::domain::background::BackgroundSetter;
use crate::domain::errors::{FetchError, PlatformError, WriteError};
use crate::domain::metadata::{MediaType, MetadataRecord, resolve_media_url};
use crate::infrastructure::client::ApodClient;
use crate::infrastructure::storage::save_image;

/// The step that stopped a run. Each step has already logged its own
/// diagnostic by the time this is returned.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to fetch APOD metadata: {0}")]
    Metadata(#[source] FetchError),

    #[error("APOD entry of type {media_type} has no displayable image")]
    NoMedia { media_type: MediaType },

    #[error("failed to download image: {0}")]
    Download(#[source] FetchError),

    #[error("{url} returned an empty image")]
    EmptyImage { url: String },

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error(transparent)]
    Platform(#[from] PlatformError),
}

/// Outcome of a run that reached the desktop.
#[derive(Debug)]
pub struct Applied {
    pub record: MetadataRecord,
    pub media_url: String,
    pub path: PathBuf,
}

/// Fetch metadata, resolve the image link, download it, save it, and apply
/// it. Every step gates the next; nothing is retried or rolled back.
pub struct Pipeline {
    client: ApodClient,
    background: Arc<dyn BackgroundSetter>,
}

impl Pipeline {
    pub fn new(client: ApodClient, background: Arc<dyn BackgroundSetter>) -> Self {
        Self { client, background }
    }

    pub async fn run(&self, date: NaiveDate, save_path: &Path) -> Result<Applied, PipelineError> {
        let record = self
            .client
            .fetch_metadata(date)
            .await
            .map_err(PipelineError::Metadata)?;

        let Some(media_url) = resolve_media_url(&record).map(str::to_owned) else {
            warn!(
                date = %date,
                media_type = %record.media_type,
                "APOD entry has no image link to download"
            );
            return Err(PipelineError::NoMedia {
                media_type: record.media_type,
            });
        };

        let bytes = self
            .client
            .fetch_bytes(&media_url)
            .await
            .map_err(PipelineError::Download)?;

        if bytes.is_empty() {
            warn!(url = %media_url, "downloaded image is empty");
            return Err(PipelineError::EmptyImage { url: media_url });
        }

        save_image(&bytes, save_path).await?;

        self.background.apply(save_path).await?;

        Ok(Applied {
            record,
            media_url,
            path: save_path.to_path_buf(),
        })
    }
}
