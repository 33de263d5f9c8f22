// bases/download_tui/src/menu.rs
//! Arrow-key list menu: clear the screen, draw the options with a `>`
//! cursor marker, move on Up/Down, confirm on Enter.

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use picker::{Picker, PickerError};
use std::fmt::Display;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("cancelled")]
    Cancelled,

    #[error(transparent)]
    Picker(#[from] PickerError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Raw-mode guard; restores the terminal on drop, error paths included.
struct RawScreen;

impl RawScreen {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawScreen {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

fn render<T: Display>(title: &str, picker: &Picker<T>) -> io::Result<()> {
    let mut out = io::stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    // Raw mode needs explicit carriage returns
    write!(out, "{title}\r\n\r\n")?;
    for (i, item) in picker.items().iter().enumerate() {
        let marker = if i == picker.index() { '>' } else { ' ' };
        write!(out, "{marker} {item}\r\n")?;
    }
    out.flush()
}

/// Run one menu to completion and return the chosen item.
pub fn choose<T: Display>(title: &str, items: Vec<T>) -> Result<T, MenuError> {
    let mut picker = Picker::new(items)?;
    let _guard = RawScreen::enter()?;

    loop {
        render(title, &picker)?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Up => picker.up(),
                KeyCode::Down => picker.down(),
                KeyCode::Enter => return Ok(picker.into_selected()),
                KeyCode::Esc | KeyCode::Char('q') => return Err(MenuError::Cancelled),
                _ => {}
            }
        }
    }
}
