use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::{Client, Url};
use tracing::{info, warn};

use crate::domain::errors::FetchError;
use crate::domain::metadata::MetadataRecord;

pub const APOD_URL: &str = "https://api.nasa.gov/planetary/apod";
pub const DEMO_API_KEY: &str = "DEMO_KEY";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = "apod-desktop/1.0";

pub struct ClientConfig {
    pub api_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: APOD_URL.to_string(),
            api_key: DEMO_API_KEY.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP access to the picture-of-the-day service and to the media it links.
pub struct ApodClient {
    endpoint: Url,
    api_key: String,
    http: Client,
}

impl ApodClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.api_url)
            .with_context(|| format!("invalid APOD API url: {}", config.api_url))?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .context("failed to configure HTTP client")?;

        Ok(Self {
            endpoint,
            api_key: config.api_key.clone(),
            http,
        })
    }

    /// Fetch the metadata record for `date`, asking for thumbnail links on
    /// video entries.
    pub async fn fetch_metadata(&self, date: NaiveDate) -> Result<MetadataRecord, FetchError> {
        let date_param = date.format("%Y-%m-%d").to_string();
        let url = self.endpoint.as_str();
        info!(date = %date_param, "fetching APOD metadata");

        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("date", date_param.as_str()),
                ("thumbs", "true"),
            ])
            .send()
            .await
            .map_err(|err| {
                warn!(date = %date_param, error = %err, "APOD metadata request failed");
                FetchError::request(url, err)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(date = %date_param, %status, "APOD metadata request returned non-success");
            return Err(FetchError::from_status(url, status));
        }

        let record = response.json::<MetadataRecord>().await.map_err(|err| {
            warn!(date = %date_param, error = %err, "failed to decode APOD metadata");
            FetchError::request(url, err)
        })?;

        info!(
            date = %date_param,
            media_type = %record.media_type,
            title = %record.title,
            "fetched APOD metadata"
        );
        Ok(record)
    }

    /// Download the raw body at `url`. The bytes are returned verbatim.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        info!(url, "downloading image");

        let response = self.http.get(url).send().await.map_err(|err| {
            warn!(url, error = %err, "failed to download image");
            FetchError::request(url, err)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, %status, "image download returned non-success");
            return Err(FetchError::from_status(url, status));
        }

        let bytes = response.bytes().await.map_err(|err| {
            warn!(url, error = %err, "failed to read image bytes");
            FetchError::request(url, err)
        })?;

        info!(url, bytes = bytes.len(), "downloaded image");
        Ok(bytes.to_vec())
    }
}
