// components/media_downloader/src/progress.rs
use crate::types::DownloadEvent;
use std::path::PathBuf;

/// Parse one extractor stdout line into a progress event.
///
/// Recognized shapes (with `--newline`, one per line):
///   `[download]  45.3% of 10.50MiB at 1.23MiB/s ETA 00:05`
///   `[download] Destination: downloads/Some Title.flac`
/// Everything else yields `None`.
pub fn parse_line(line: &str) -> Option<DownloadEvent> {
    let rest = line.trim().strip_prefix("[download]")?.trim_start();

    if let Some(path) = rest.strip_prefix("Destination:") {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        return Some(DownloadEvent::Destination(PathBuf::from(path)));
    }

    let percent_token = rest.split_whitespace().find(|t| t.ends_with('%'))?;
    let percent: f32 = percent_token.trim_end_matches('%').parse().ok()?;
    Some(DownloadEvent::Progress { percent })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_parses_percent_line() {
        let event = parse_line("[download]  45.3% of 10.50MiB at 1.23MiB/s ETA 00:05");
        assert_eq!(event, Some(DownloadEvent::Progress { percent: 45.3 }));
    }

    #[test]
    fn test_parses_completed_line() {
        let event = parse_line("[download] 100% of 10.50MiB in 00:08");
        assert_eq!(event, Some(DownloadEvent::Progress { percent: 100.0 }));
    }

    #[test]
    fn test_parses_destination_line() {
        let event = parse_line("[download] Destination: downloads/Some Title.flac");
        match event {
            Some(DownloadEvent::Destination(path)) => {
                assert_eq!(path, Path::new("downloads/Some Title.flac"));
            }
            other => panic!("expected Destination event, got {:?}", other),
        }
    }

    #[test]
    fn test_ignores_unrelated_lines() {
        assert_eq!(parse_line("[youtube] abc: Downloading webpage"), None);
        assert_eq!(parse_line("[download] Resuming download"), None);
        assert_eq!(parse_line(""), None);
    }
}
