use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatTagError {
    #[error("unknown format tag: {0} (expected one of mp3, wav, flac, mp4)")]
    Unknown(String),
}

/// Output format selector, a closed set of tags.
///
/// The three audio tags select the codec the extractor converts to;
/// `mp4` selects a video container instead.
///
/// # Examples
/// ```
/// # use download_primitives::FormatTag;
/// let tag: FormatTag = "flac".parse().unwrap();
/// assert!(!tag.is_video());
/// assert_eq!(tag.extension(), "flac");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    Mp3,
    Wav,
    Flac,
    Mp4,
}

impl FormatTag {
    /// Every selectable tag, in menu order.
    pub const ALL: [FormatTag; 4] = [
        FormatTag::Mp3,
        FormatTag::Wav,
        FormatTag::Flac,
        FormatTag::Mp4,
    ];

    /// The lowercase tag as the extractor expects it.
    pub fn label(self) -> &'static str {
        match self {
            FormatTag::Mp3 => "mp3",
            FormatTag::Wav => "wav",
            FormatTag::Flac => "flac",
            FormatTag::Mp4 => "mp4",
        }
    }

    /// File extension of the finished download.
    pub fn extension(self) -> &'static str {
        self.label()
    }

    /// True when the tag keeps the video stream.
    pub fn is_video(self) -> bool {
        matches!(self, FormatTag::Mp4)
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FormatTag {
    type Err = FormatTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mp3" => Ok(FormatTag::Mp3),
            "wav" => Ok(FormatTag::Wav),
            "flac" => Ok(FormatTag::Flac),
            "mp4" => Ok(FormatTag::Mp4),
            other => Err(FormatTagError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for tag in FormatTag::ALL {
            let parsed: FormatTag = tag.label().parse().unwrap();
            assert_eq!(parsed, tag);
        }
    }

    #[test]
    fn test_rejects_unknown_tag() {
        let result = "ogg".parse::<FormatTag>();
        assert!(
            matches!(result, Err(FormatTagError::Unknown(ref s)) if s == "ogg"),
            "expected Unknown error, got {:?}",
            result
        );
    }

    #[test]
    fn test_only_mp4_is_video() {
        for tag in FormatTag::ALL {
            assert_eq!(tag.is_video(), tag == FormatTag::Mp4);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&FormatTag::Flac).unwrap();
        assert_eq!(json, "\"flac\"");
    }
}
