// bases/download_gui/src/main.rs
mod app;
mod worker;

use app::App;

pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "download_gui=info,media_downloader=info".into()),
        )
        .init();

    iced::application(App::title, App::update, App::view)
        .run_with(|| (App::new(), iced::Task::none()))
}
