// bases/download_cli/src/args.rs
use clap::Parser;
use download_primitives::FormatTag;
use locale_catalog::Lang;
use std::path::PathBuf;

/// Download audio or video from a URL via yt-dlp
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// URL to download from
    pub url: String,

    /// Output format: mp3, wav, flac or mp4
    #[arg(short, long, default_value = "flac")]
    pub format: FormatTag,

    /// Folder to store the downloaded file
    #[arg(short, long, default_value = "downloads")]
    pub output_dir: PathBuf,

    /// Message language: ru or en
    #[arg(short, long, default_value = "en")]
    pub lang: Lang,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
