// bases/download_tui/src/main.rs
mod flow;
mod menu;
mod prompt;

use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    flow::run().await
}
