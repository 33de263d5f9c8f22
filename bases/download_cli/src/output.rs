// bases/download_cli/src/output.rs
use download_primitives::FormatTag;
use locale_catalog::{text, Lang, Msg};
use media_downloader::{DownloadOutcome, TrackMetadata};

pub struct OutputHandler {
    lang: Lang,
    verbose: bool,
}

impl OutputHandler {
    pub fn new(lang: Lang, verbose: bool) -> Self {
        Self { lang, verbose }
    }

    pub fn print_chosen_format(&self, format: FormatTag) {
        println!(
            "\n{} {}\n",
            text(self.lang, Msg::ChosenFormat),
            format.label().to_uppercase()
        );
    }

    pub fn print_metadata(&self, metadata: &TrackMetadata) {
        println!("{}", metadata.title);
        if let Some(uploader) = &metadata.uploader {
            println!("  {uploader}");
        }
        if let Some(duration) = metadata.duration {
            println!("  {duration:.1} s");
        }
        if self.verbose {
            println!("  {}", metadata.source_url);
        }
    }

    pub fn print_success(&self, format: FormatTag, outcome: &DownloadOutcome) {
        println!("{} {}!", text(self.lang, Msg::Success), format.label());
        if self.verbose {
            println!("  -> {}", outcome.folder.display());
        }
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        eprintln!("{}: {}", text(self.lang, Msg::Error), error);

        if self.verbose {
            error.chain().skip(1).for_each(|cause| {
                eprintln!("  caused by: {cause}");
            });
        }
    }
}
