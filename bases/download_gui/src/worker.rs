// bases/download_gui/src/worker.rs
//! The one background worker per click: runs the download off the UI
//! thread and yields events the runtime relays back to `update`.

use download_primitives::FormatTag;
use iced::futures::Stream;
use media_downloader::{DownloadEvent, MediaDownloader};
use std::path::PathBuf;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum WorkerEvent {
    Progress(f32),
    Destination(PathBuf),
    Finished(Result<Option<PathBuf>, String>),
}

/// Drive one download as an event stream. Always ends with `Finished`.
pub fn download(url: String, format: FormatTag, folder: PathBuf) -> impl Stream<Item = WorkerEvent> {
    async_stream::stream! {
        let (tx, mut rx) = mpsc::channel(64);

        let run = tokio::spawn(async move {
            let downloader = MediaDownloader::new(&folder).await?;
            downloader.download_with_events(&url, format, tx).await
        });

        // Runs dry once the download task drops its sender
        while let Some(event) = rx.recv().await {
            match event {
                DownloadEvent::Progress { percent } => yield WorkerEvent::Progress(percent),
                DownloadEvent::Destination(path) => yield WorkerEvent::Destination(path),
            }
        }

        let result = match run.await {
            Ok(Ok(outcome)) => Ok(outcome.destination),
            Ok(Err(error)) => Err(error.to_string()),
            Err(error) => Err(error.to_string()),
        };
        yield WorkerEvent::Finished(result);
    }
}
