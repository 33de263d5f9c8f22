// bases/download_tui/src/prompt.rs
use std::io::{self, Write};

/// Plain line prompt, outside raw mode.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("\n{prompt} ");
    io::stdout().flush()?;

    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

/// Line prompt that falls back to a default on empty input.
pub fn read_line_or(prompt: &str, default: &str) -> io::Result<String> {
    let answer = read_line(&format!("{prompt} [{default}]"))?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}
