use crate::format_tag::FormatTag;
use crate::template::OutputTemplate;
use std::path::Path;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("URL must not be empty")]
    EmptyUrl,

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// One validated download: where from, what format, where to.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    url: Url,
    format: FormatTag,
    template: OutputTemplate,
}

impl DownloadRequest {
    pub fn new(
        url: &str,
        format: FormatTag,
        folder: impl AsRef<Path>,
    ) -> Result<Self, RequestError> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(RequestError::EmptyUrl);
        }
        let url = Url::parse(trimmed).map_err(|e| RequestError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            url,
            format,
            template: OutputTemplate::new(folder),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn format(&self) -> FormatTag {
        self.format
    }

    pub fn template(&self) -> &OutputTemplate {
        &self.template
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_url() {
        let result = DownloadRequest::new("   ", FormatTag::Flac, "downloads");
        assert!(matches!(result, Err(RequestError::EmptyUrl)));
    }

    #[test]
    fn test_rejects_malformed_url() {
        let result = DownloadRequest::new("not a url", FormatTag::Mp3, "downloads");
        assert!(matches!(result, Err(RequestError::InvalidUrl(_))));
    }

    #[test]
    fn test_accepts_trimmed_url() {
        let request =
            DownloadRequest::new("  https://example.com/watch?v=1  ", FormatTag::Mp4, "out")
                .unwrap();
        assert_eq!(request.url().as_str(), "https://example.com/watch?v=1");
        assert_eq!(request.format(), FormatTag::Mp4);
    }
}
