use std::path::{Path, PathBuf};

/// Output path template handed to the extractor.
///
/// Renders to `<folder>/%(title)s.%(ext)s`, letting the extractor fill
/// in the media title and the extension of the converted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTemplate {
    folder: PathBuf,
}

impl OutputTemplate {
    pub const PATTERN: &'static str = "%(title)s.%(ext)s";

    pub fn new(folder: impl AsRef<Path>) -> Self {
        Self {
            folder: folder.as_ref().to_owned(),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// The `-o` argument value.
    pub fn to_arg(&self) -> String {
        self.folder.join(Self::PATTERN).to_string_lossy().into_owned()
    }

    /// Concrete path for a known title and extension.
    pub fn resolve(&self, title: &str, extension: &str) -> PathBuf {
        self.folder.join(format!("{title}.{extension}"))
    }
}
