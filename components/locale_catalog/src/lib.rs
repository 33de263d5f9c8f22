//! The two hardcoded locales and every user-facing string.
//!
//! Bases never format their own prose; they look it up here so the
//! Russian and English variants cannot drift apart.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LangError {
    #[error("unknown language: {0} (expected ru or en)")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Ru,
    En,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Ru, Lang::En];

    pub fn tag(self) -> &'static str {
        match self {
            Lang::Ru => "ru",
            Lang::En => "en",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Lang {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ru" => Ok(Lang::Ru),
            "en" => Ok(Lang::En),
            other => Err(LangError::Unknown(other.to_string())),
        }
    }
}

/// Message keys, one per user-facing string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Msg {
    ChooseLanguage,
    EnterUrl,
    ChooseFormat,
    ChooseFolder,
    ChosenFormat,
    Downloading,
    Success,
    Error,
    DownloadButton,
    BrowseButton,
    FolderLabel,
    UrlPlaceholder,
    Idle,
}

impl Msg {
    pub const ALL: [Msg; 13] = [
        Msg::ChooseLanguage,
        Msg::EnterUrl,
        Msg::ChooseFormat,
        Msg::ChooseFolder,
        Msg::ChosenFormat,
        Msg::Downloading,
        Msg::Success,
        Msg::Error,
        Msg::DownloadButton,
        Msg::BrowseButton,
        Msg::FolderLabel,
        Msg::UrlPlaceholder,
        Msg::Idle,
    ];
}

/// Look up one string. The language-choice prompt is intentionally
/// bilingual, it is shown before a language exists.
pub fn text(lang: Lang, msg: Msg) -> &'static str {
    match lang {
        Lang::Ru => match msg {
            Msg::ChooseLanguage => "Выберите язык / Choose language:",
            Msg::EnterUrl => "Введите URL видео:",
            Msg::ChooseFormat => "Выберите формат:",
            Msg::ChooseFolder => "Папка для загрузки:",
            Msg::ChosenFormat => "## Выбранный формат:",
            Msg::Downloading => "Загрузка...",
            Msg::Success => "## Файл успешно скачан в формате",
            Msg::Error => "## Ошибка",
            Msg::DownloadButton => "Скачать",
            Msg::BrowseButton => "Обзор...",
            Msg::FolderLabel => "Папка:",
            Msg::UrlPlaceholder => "URL видео",
            Msg::Idle => "Готов к загрузке",
        },
        Lang::En => match msg {
            Msg::ChooseLanguage => "Выберите язык / Choose language:",
            Msg::EnterUrl => "Enter video URL:",
            Msg::ChooseFormat => "Select format:",
            Msg::ChooseFolder => "Download folder:",
            Msg::ChosenFormat => "## Selected format:",
            Msg::Downloading => "Downloading...",
            Msg::Success => "## File successfully downloaded in",
            Msg::Error => "## Error",
            Msg::DownloadButton => "Download",
            Msg::BrowseButton => "Browse...",
            Msg::FolderLabel => "Folder:",
            Msg::UrlPlaceholder => "Video URL",
            Msg::Idle => "Ready to download",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_present_in_both_locales() {
        for lang in Lang::ALL {
            for msg in Msg::ALL {
                assert!(
                    !text(lang, msg).is_empty(),
                    "missing {:?} string for {:?}",
                    msg,
                    lang
                );
            }
        }
    }

    #[test]
    fn test_language_prompt_is_bilingual() {
        assert_eq!(
            text(Lang::Ru, Msg::ChooseLanguage),
            text(Lang::En, Msg::ChooseLanguage)
        );
    }

    #[test]
    fn test_lang_parse_round_trip() {
        for lang in Lang::ALL {
            assert_eq!(lang.tag().parse::<Lang>().unwrap(), lang);
        }
        assert!(matches!("de".parse::<Lang>(), Err(LangError::Unknown(_))));
    }
}
