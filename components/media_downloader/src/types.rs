// components/media_downloader/src/types.rs
use chrono::{DateTime, Utc};
use download_primitives::RequestError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("yt-dlp not found: place it next to the executable or on PATH")]
    ExtractorNotFound,

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("download failed: {0}")]
    DownloadFailed(String),

    #[error("could not read media metadata: {0}")]
    MetadataError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<RequestError> for DownloadError {
    fn from(err: RequestError) -> Self {
        DownloadError::InvalidUrl(err.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackMetadata {
    /// Media title as the extractor reports it
    pub title: String,

    /// Uploader/channel, when the site exposes one
    pub uploader: Option<String>,

    /// Duration in seconds, when known
    pub duration: Option<f64>,

    /// Original URL the media was downloaded from
    pub source_url: String,

    /// When the metadata was fetched
    pub download_time: DateTime<Utc>,
}

/// Progress relayed from the extractor's stdout while a download runs.
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadEvent {
    /// A `[download]  NN.N%` line
    Progress { percent: f32 },

    /// The file the extractor announced it is writing to
    Destination(PathBuf),
}

/// What a finished download produced.
#[derive(Debug, Clone)]
pub struct DownloadOutcome {
    /// Destination folder the output template pointed at
    pub folder: PathBuf,

    /// Concrete file path, when the extractor announced one
    pub destination: Option<PathBuf>,
}
