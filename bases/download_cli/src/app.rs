// bases/download_cli/src/app.rs
use crate::args::Args;
use crate::output::OutputHandler;
use color_eyre::Result;
use media_downloader::MediaDownloader;

pub struct App {
    args: Args,
    output: OutputHandler,
}

impl App {
    pub fn new(args: Args) -> Self {
        let output = OutputHandler::new(args.lang, args.verbose);
        Self { args, output }
    }

    pub async fn run(&self) -> Result<()> {
        let downloader = MediaDownloader::new(&self.args.output_dir).await?;

        self.output.print_chosen_format(self.args.format);

        tracing::info!(url = %self.args.url, "probing metadata");
        let metadata = downloader.fetch_metadata(&self.args.url).await?;
        self.output.print_metadata(&metadata);

        tracing::info!(format = %self.args.format, "starting download");
        let outcome = downloader.download(&self.args.url, self.args.format).await?;
        tracing::info!(folder = %outcome.folder.display(), "download finished");
        self.output.print_success(self.args.format, &outcome);

        Ok(())
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        self.output.print_error(error);
    }
}
