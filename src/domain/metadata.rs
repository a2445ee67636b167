use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Classification of the day's entry. Drives which link is used as the
/// displayable image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    #[default]
    #[serde(other)]
    Other,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Other => "other",
        };
        f.write_str(name)
    }
}

/// One picture-of-the-day entry as returned by the metadata service.
///
/// The service omits fields freely (no `hdurl` for videos, no
/// `thumbnail_url` unless thumbnails were requested, no `copyright` for
/// public domain images), so everything is optional here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub media_type: MediaType,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_version: Option<String>,
}

impl MetadataRecord {
    /// The link to download for display: `hdurl` for images,
    /// `thumbnail_url` for videos, nothing otherwise.
    /// Empty links count as absent. Never falls back to the
    /// standard-resolution `url`.
    pub fn media_url(&self) -> Option<&str> {
        resolve_media_url(self)
    }
}

pub fn resolve_media_url(record: &MetadataRecord) -> Option<&str> {
    let link = match record.media_type {
        MediaType::Image => record.hdurl.as_deref(),
        MediaType::Video => record.thumbnail_url.as_deref(),
        MediaType::Other => None,
    };
    link.filter(|url| !url.is_empty())
}
