// bases/download_tui/src/flow.rs
//! The interactive run: language menu, URL prompt, format menu, folder
//! prompt, download with a live percent readout, localized result.

use crate::menu::{self, MenuError};
use crate::prompt;
use color_eyre::Result;
use download_primitives::FormatTag;
use locale_catalog::{text, Lang, Msg};
use media_downloader::{DownloadEvent, MediaDownloader};
use std::io::{self, Write};
use tokio::sync::mpsc;

const DEFAULT_FOLDER: &str = "downloads";

pub async fn run() -> Result<()> {
    let lang = match menu::choose(text(Lang::En, Msg::ChooseLanguage), Lang::ALL.to_vec()) {
        Ok(lang) => lang,
        Err(MenuError::Cancelled) => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    let url = prompt::read_line(text(lang, Msg::EnterUrl))?;

    let format = match menu::choose(text(lang, Msg::ChooseFormat), FormatTag::ALL.to_vec()) {
        Ok(format) => format,
        Err(MenuError::Cancelled) => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    let folder = prompt::read_line_or(text(lang, Msg::ChooseFolder), DEFAULT_FOLDER)?;

    println!(
        "\n{} {}\n",
        text(lang, Msg::ChosenFormat),
        format.label().to_uppercase()
    );

    if let Err(error) = download(lang, &url, format, &folder).await {
        println!("{}: {error}", text(lang, Msg::Error));
        std::process::exit(1);
    }

    println!("{} {}!", text(lang, Msg::Success), format.label());
    Ok(())
}

async fn download(
    lang: Lang,
    url: &str,
    format: FormatTag,
    folder: &str,
) -> Result<(), media_downloader::DownloadError> {
    let downloader = MediaDownloader::new(folder).await?;

    let (tx, mut rx) = mpsc::channel(32);
    let label = text(lang, Msg::Downloading);
    let readout = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            if let DownloadEvent::Progress { percent } = event {
                print!("\r{label} {percent:5.1}%");
                let _ = io::stdout().flush();
            }
        }
        println!();
    });

    let result = downloader.download_with_events(url, format, tx).await;

    // The sender is gone, the readout task ends on its own
    let _ = readout.await;
    result.map(|_| ())
}
