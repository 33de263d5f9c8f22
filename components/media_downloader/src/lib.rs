// components/media_downloader/src/lib.rs
mod progress;
mod types;
mod ytdlp;

use download_primitives::{DownloadRequest, FormatTag};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;

pub use types::{DownloadError, DownloadEvent, DownloadOutcome, TrackMetadata};
pub use ytdlp::{Downloader, YtDlp};

pub struct MediaDownloader {
    folder: PathBuf,
    downloader: Arc<dyn Downloader + Send + Sync>,
}

impl MediaDownloader {
    /// Create a new MediaDownloader that will store files in the given folder
    pub async fn new(folder: impl AsRef<Path>) -> Result<Self, DownloadError> {
        Self::with_downloader(folder, Arc::new(YtDlp)).await
    }

    /// Create a new MediaDownloader with a specific downloader implementation
    pub async fn with_downloader(
        folder: impl AsRef<Path>,
        downloader: Arc<dyn Downloader + Send + Sync>,
    ) -> Result<Self, DownloadError> {
        downloader.check_available().await?;

        let folder = folder.as_ref().to_owned();
        tokio::fs::create_dir_all(&folder).await?;

        Ok(Self { folder, downloader })
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Fetch title/uploader/duration without downloading anything
    pub async fn fetch_metadata(&self, url: &str) -> Result<TrackMetadata, DownloadError> {
        let url = url::Url::parse(url.trim())
            .map_err(|e| DownloadError::InvalidUrl(e.to_string()))?;
        self.downloader.fetch_metadata(&url).await
    }

    /// Download, letting the extractor write its own output to the terminal
    pub async fn download(
        &self,
        url: &str,
        format: FormatTag,
    ) -> Result<DownloadOutcome, DownloadError> {
        self.run(url, format, None).await
    }

    /// Download, relaying parsed progress events over the given channel
    pub async fn download_with_events(
        &self,
        url: &str,
        format: FormatTag,
        events: mpsc::Sender<DownloadEvent>,
    ) -> Result<DownloadOutcome, DownloadError> {
        self.run(url, format, Some(events)).await
    }

    async fn run(
        &self,
        url: &str,
        format: FormatTag,
        events: Option<mpsc::Sender<DownloadEvent>>,
    ) -> Result<DownloadOutcome, DownloadError> {
        let request = DownloadRequest::new(url, format, &self.folder)?;
        self.downloader.download(&request, events).await
    }
}
