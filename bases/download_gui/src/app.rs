// bases/download_gui/src/app.rs
use crate::worker::{self, WorkerEvent};
use download_primitives::FormatTag;
use iced::widget::{button, column, container, pick_list, progress_bar, row, text, text_input};
use iced::{Element, Length, Task};
use locale_catalog::{Lang, Msg};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    LangPicked(Lang),
    UrlChanged(String),
    FormatPicked(FormatTag),
    BrowseFolder,
    FolderPicked(Option<PathBuf>),
    StartDownload,
    Worker(WorkerEvent),
}

#[derive(Debug, Clone)]
enum Status {
    Idle,
    Working,
    Done,
    Failed(String),
}

pub struct App {
    lang: Lang,
    url: String,
    format: FormatTag,
    folder: PathBuf,
    progress: f32,
    destination: Option<PathBuf>,
    status: Status,
}

impl App {
    pub fn new() -> Self {
        let folder = directories::UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("downloads"));

        Self {
            lang: Lang::En,
            url: String::new(),
            format: FormatTag::Flac,
            folder,
            progress: 0.0,
            destination: None,
            status: Status::Idle,
        }
    }

    pub fn title(&self) -> String {
        String::from("Media Downloader")
    }

    fn t(&self, msg: Msg) -> &'static str {
        locale_catalog::text(self.lang, msg)
    }

    fn working(&self) -> bool {
        matches!(self.status, Status::Working)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LangPicked(lang) => {
                self.lang = lang;
                Task::none()
            }
            Message::UrlChanged(url) => {
                self.url = url;
                Task::none()
            }
            Message::FormatPicked(format) => {
                self.format = format;
                Task::none()
            }
            Message::BrowseFolder => {
                let start_dir = self.folder.clone();
                Task::perform(
                    async move {
                        rfd::AsyncFileDialog::new()
                            .set_directory(&start_dir)
                            .pick_folder()
                            .await
                            .map(|handle| handle.path().to_path_buf())
                    },
                    Message::FolderPicked,
                )
            }
            Message::FolderPicked(choice) => {
                if let Some(folder) = choice {
                    self.folder = folder;
                }
                Task::none()
            }
            Message::StartDownload => {
                // At most one download in flight per click
                if self.working() || self.url.trim().is_empty() {
                    return Task::none();
                }
                self.status = Status::Working;
                self.progress = 0.0;
                self.destination = None;

                tracing::info!(url = %self.url, format = %self.format, "starting download");
                Task::run(
                    worker::download(self.url.clone(), self.format, self.folder.clone()),
                    Message::Worker,
                )
            }
            Message::Worker(WorkerEvent::Progress(percent)) => {
                self.progress = percent;
                Task::none()
            }
            Message::Worker(WorkerEvent::Destination(path)) => {
                self.destination = Some(path);
                Task::none()
            }
            Message::Worker(WorkerEvent::Finished(result)) => {
                match result {
                    Ok(destination) => {
                        self.progress = 100.0;
                        if destination.is_some() {
                            self.destination = destination;
                        }
                        self.status = Status::Done;
                    }
                    Err(message) => self.status = Status::Failed(message),
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let can_start = !self.working() && !self.url.trim().is_empty();

        let language = row![
            pick_list(Lang::ALL, Some(self.lang), Message::LangPicked),
            pick_list(FormatTag::ALL, Some(self.format), Message::FormatPicked),
        ]
        .spacing(10);

        let url = text_input(self.t(Msg::UrlPlaceholder), &self.url)
            .on_input(Message::UrlChanged)
            .padding(8);

        let folder = row![
            text(format!(
                "{} {}",
                self.t(Msg::FolderLabel),
                self.folder.display()
            ))
            .width(Length::Fill),
            button(text(self.t(Msg::BrowseButton)))
                .on_press_maybe((!self.working()).then_some(Message::BrowseFolder)),
        ]
        .spacing(10);

        let download = button(text(self.t(Msg::DownloadButton)))
            .on_press_maybe(can_start.then_some(Message::StartDownload));

        let status = text(self.status_line());

        let form = column![
            language,
            url,
            folder,
            download,
            progress_bar(0.0..=100.0, self.progress),
            status,
        ]
        .spacing(12);

        container(form).padding(20).into()
    }

    fn status_line(&self) -> String {
        match &self.status {
            Status::Idle => self.t(Msg::Idle).to_string(),
            Status::Working => format!("{} {:.0}%", self.t(Msg::Downloading), self.progress),
            Status::Done => match &self.destination {
                Some(path) => format!(
                    "{} {}! ({})",
                    self.t(Msg::Success),
                    self.format.label(),
                    path.display()
                ),
                None => format!("{} {}!", self.t(Msg::Success), self.format.label()),
            },
            Status::Failed(message) => format!("{}: {message}", self.t(Msg::Error)),
        }
    }
}
