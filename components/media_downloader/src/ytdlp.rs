// components/media_downloader/src/ytdlp.rs
use crate::progress;
use crate::types::{DownloadError, DownloadEvent, DownloadOutcome, TrackMetadata};
use async_trait::async_trait;
use download_primitives::DownloadRequest;
use serde::Deserialize;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tokio::sync::mpsc;
use url::Url;

#[cfg(windows)]
const BINARY_NAME: &str = "yt-dlp.exe";
#[cfg(not(windows))]
const BINARY_NAME: &str = "yt-dlp";

/// How many trailing stderr lines to keep for the failure message.
const STDERR_TAIL: usize = 8;

#[async_trait]
pub trait Downloader {
    /// Check that the extractor binary can be found
    async fn check_available(&self) -> Result<(), DownloadError>;

    /// Fetch metadata about the media without downloading it
    async fn fetch_metadata(&self, url: &Url) -> Result<TrackMetadata, DownloadError>;

    /// Run the extractor; when `events` is given, stdout is parsed and
    /// progress is relayed over the channel, otherwise the extractor
    /// inherits the terminal
    async fn download(
        &self,
        request: &DownloadRequest,
        events: Option<mpsc::Sender<DownloadEvent>>,
    ) -> Result<DownloadOutcome, DownloadError>;
}

pub struct YtDlp;

impl YtDlp {
    /// Locate the extractor: a sibling of the current executable first
    /// (named per OS family), then a PATH lookup.
    fn resolve_binary() -> Result<PathBuf, DownloadError> {
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let sibling = dir.join(BINARY_NAME);
                if sibling.is_file() {
                    return Ok(dunce::canonicalize(&sibling).unwrap_or(sibling));
                }
            }
        }
        which::which(BINARY_NAME).map_err(|_| DownloadError::ExtractorNotFound)
    }
}

/// Assemble the extractor's argument list for one request.
///
/// `mp4` keeps the video stream and merges into an mp4 container; every
/// audio tag extracts and converts audio only.
pub(crate) fn build_args(request: &DownloadRequest, with_progress: bool) -> Vec<String> {
    let mut args: Vec<String> = if request.format().is_video() {
        vec![
            "-f".into(),
            "bestvideo+bestaudio/best".into(),
            "--merge-output-format".into(),
            "mp4".into(),
        ]
    } else {
        vec![
            "-f".into(),
            "bestaudio".into(),
            "--extract-audio".into(),
            "--audio-format".into(),
            request.format().label().into(),
        ]
    };

    if with_progress {
        // One progress line per stdout line instead of carriage returns
        args.push("--newline".into());
    }

    args.push("-o".into());
    args.push(request.template().to_arg());
    args.push(request.url().as_str().into());
    args
}

async fn relay_events(
    stdout: tokio::process::ChildStdout,
    events: &mpsc::Sender<DownloadEvent>,
) -> Result<Option<PathBuf>, std::io::Error> {
    let mut destination = None;
    let mut lines = BufReader::new(stdout).lines();

    while let Some(line) = lines.next_line().await? {
        if let Some(event) = progress::parse_line(&line) {
            if let DownloadEvent::Destination(path) = &event {
                destination = Some(path.clone());
            }
            // A closed receiver means nobody is watching anymore;
            // keep draining so the child is not blocked on a full pipe
            let _ = events.send(event).await;
        }
    }
    Ok(destination)
}

async fn stderr_tail(stderr: tokio::process::ChildStderr) -> String {
    let mut tail: VecDeque<String> = VecDeque::new();
    let mut lines = BufReader::new(stderr).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        if tail.len() == STDERR_TAIL {
            tail.pop_front();
        }
        tail.push_back(line);
    }
    tail.into_iter().collect::<Vec<_>>().join("\n")
}

#[async_trait]
impl Downloader for YtDlp {
    async fn check_available(&self) -> Result<(), DownloadError> {
        Self::resolve_binary().map(|_| ())
    }

    async fn fetch_metadata(&self, url: &Url) -> Result<TrackMetadata, DownloadError> {
        let binary = Self::resolve_binary()?;

        let output = Command::new(&binary)
            .arg("--dump-json")
            .arg("--no-download")
            .arg(url.as_str())
            .output()
            .await?;

        if !output.status.success() {
            return Err(DownloadError::MetadataError(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }

        let meta: YtDlpMetadata = serde_json::from_slice(&output.stdout)
            .map_err(|e| DownloadError::MetadataError(e.to_string()))?;

        Ok(TrackMetadata {
            title: meta.title,
            uploader: meta.uploader,
            duration: meta.duration,
            source_url: meta.webpage_url.unwrap_or_else(|| url.to_string()),
            download_time: chrono::Utc::now(),
        })
    }

    async fn download(
        &self,
        request: &DownloadRequest,
        events: Option<mpsc::Sender<DownloadEvent>>,
    ) -> Result<DownloadOutcome, DownloadError> {
        let binary = Self::resolve_binary()?;
        let args = build_args(request, events.is_some());
        let folder = request.template().folder().to_owned();

        tracing::debug!(binary = %binary.display(), ?args, "invoking extractor");

        let Some(events) = events else {
            // No relay requested: let the extractor own the terminal,
            // the way the plain CLI run works
            let status = Command::new(&binary).args(&args).status().await?;
            if !status.success() {
                return Err(DownloadError::DownloadFailed(format!(
                    "yt-dlp exited with status: {status}"
                )));
            }
            return Ok(DownloadOutcome {
                folder,
                destination: None,
            });
        };

        let mut child = Command::new(&binary)
            .args(&args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let stdout = child.stdout.take().ok_or_else(|| {
            DownloadError::DownloadFailed("could not capture extractor stdout".to_string())
        })?;
        let stderr = child.stderr.take().ok_or_else(|| {
            DownloadError::DownloadFailed("could not capture extractor stderr".to_string())
        })?;

        // Drain both pipes before waiting so the child never blocks on
        // a full one
        let (destination, tail) = tokio::join!(relay_events(stdout, &events), stderr_tail(stderr));
        let destination = destination?;

        let status = child.wait().await?;
        if !status.success() {
            let message = if tail.is_empty() {
                format!("yt-dlp exited with status: {status}")
            } else {
                tail
            };
            return Err(DownloadError::DownloadFailed(message));
        }

        tracing::info!(folder = %folder.display(), "extractor finished");
        Ok(DownloadOutcome {
            folder,
            destination,
        })
    }
}

#[derive(Debug, Deserialize)]
struct YtDlpMetadata {
    title: String,
    #[serde(default)]
    uploader: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    webpage_url: Option<String>,
}

#[cfg(test)]
pub mod stub {
    use super::*;

    /// Test double that pretends every download succeeds and emits a
    /// small, fixed event sequence.
    pub struct DownloaderStub;

    #[async_trait]
    impl Downloader for DownloaderStub {
        async fn check_available(&self) -> Result<(), DownloadError> {
            Ok(())
        }

        async fn fetch_metadata(&self, url: &Url) -> Result<TrackMetadata, DownloadError> {
            Ok(TrackMetadata {
                title: "Test Song".to_string(),
                uploader: Some("Test Artist".to_string()),
                duration: Some(180.0),
                source_url: url.to_string(),
                download_time: chrono::Utc::now(),
            })
        }

        async fn download(
            &self,
            request: &DownloadRequest,
            events: Option<mpsc::Sender<DownloadEvent>>,
        ) -> Result<DownloadOutcome, DownloadError> {
            let destination = request
                .template()
                .resolve("Test Song", request.format().extension());

            if let Some(events) = events {
                let _ = events
                    .send(DownloadEvent::Destination(destination.clone()))
                    .await;
                for percent in [25.0, 50.0, 100.0] {
                    let _ = events.send(DownloadEvent::Progress { percent }).await;
                }
            }

            Ok(DownloadOutcome {
                folder: request.template().folder().to_owned(),
                destination: Some(destination),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use download_primitives::FormatTag;

    fn request(format: FormatTag) -> DownloadRequest {
        DownloadRequest::new("https://example.com/watch?v=1", format, "downloads").unwrap()
    }

    #[test]
    fn test_mp4_builds_video_argument_set() {
        let args = build_args(&request(FormatTag::Mp4), false);

        assert!(args.contains(&"--merge-output-format".to_string()));
        assert!(args.contains(&"mp4".to_string()));
        assert!(!args.contains(&"--extract-audio".to_string()));
    }

    #[test]
    fn test_audio_tags_build_extraction_argument_set() {
        for format in [FormatTag::Mp3, FormatTag::Wav, FormatTag::Flac] {
            let args = build_args(&request(format), false);

            assert!(args.contains(&"--extract-audio".to_string()));
            assert!(args.contains(&format.label().to_string()));
            assert!(!args.contains(&"--merge-output-format".to_string()));
        }
    }

    #[test]
    fn test_progress_flag_only_when_relaying() {
        let silent = build_args(&request(FormatTag::Flac), false);
        let relayed = build_args(&request(FormatTag::Flac), true);

        assert!(!silent.contains(&"--newline".to_string()));
        assert!(relayed.contains(&"--newline".to_string()));
    }

    #[test]
    fn test_output_template_and_url_come_last() {
        let args = build_args(&request(FormatTag::Mp3), false);
        let template_pos = args.iter().position(|a| a == "-o").unwrap();

        assert!(args[template_pos + 1].ends_with("%(title)s.%(ext)s"));
        assert_eq!(args.last().unwrap(), "https://example.com/watch?v=1");
    }
}
