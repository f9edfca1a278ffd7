//! Line input from the user.
//!
//! Plain prompts on a terminal go through `dialoguer`, which restores the
//! terminal before passing Ctrl-C on. Masked prompts read key events in raw
//! mode held by [`RawMode`]; Ctrl-C arrives as a key there and ends the
//! prompt with an error, and the previous mode is restored when the guard
//! drops. Piped stdin is read line by line.

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use dialoguer::Input;
use tracing::trace;
use zeroize::Zeroize;

use crate::error::{ConfigError, Result};

/// Source of one line of user input.
pub trait Prompter {
    /// Show `title` and read one line, hidden when `masked` is set.
    ///
    /// The returned line is not trimmed.
    fn read_line(&self, title: &str, masked: bool) -> Result<String>;
}

impl<T: Prompter + ?Sized> Prompter for &T {
    fn read_line(&self, title: &str, masked: bool) -> Result<String> {
        (**self).read_line(title, masked)
    }
}

/// Prompter bound to the process stdin/stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct Terminal;

impl Terminal {
    fn read_piped(title: &str) -> Result<String> {
        eprint!("Enter {}: ", title);
        let _ = io::stderr().flush();

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(prompt_error(title, "unexpected end of input"));
        }
        eprintln!();
        Ok(line)
    }

    fn read_masked(title: &str) -> Result<String> {
        eprint!("Enter {}: ", title);
        let _ = io::stderr().flush();

        let mut line = String::new();
        let step = {
            let _raw = RawMode::enable().map_err(|e| prompt_error(title, e))?;
            loop {
                let key = match event::read() {
                    Ok(Event::Key(key)) => key,
                    Ok(_) => continue,
                    Err(e) => break Err(e),
                };
                match apply_key(&mut line, key) {
                    Step::Continue => {}
                    step => break Ok(step),
                }
            }
        };
        eprintln!();

        match step {
            Ok(Step::Done) => Ok(line),
            Ok(_) => {
                line.zeroize();
                Err(prompt_error(title, "interrupted"))
            }
            Err(e) => {
                line.zeroize();
                Err(prompt_error(title, e))
            }
        }
    }
}

impl Prompter for Terminal {
    fn read_line(&self, title: &str, masked: bool) -> Result<String> {
        trace!(title, masked, "prompting");

        if !io::stdin().is_terminal() {
            return Self::read_piped(title);
        }
        if masked {
            return Self::read_masked(title);
        }

        Input::<String>::new()
            .with_prompt(format!("Enter {}", title))
            .interact_text()
            .map_err(|e| prompt_error(title, e))
    }
}

fn prompt_error(title: &str, reason: impl ToString) -> crate::error::Error {
    ConfigError::Prompt {
        title: title.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// Terminal raw mode for the lifetime of the value.
///
/// Raw mode turns off echo and signal generation, so Ctrl-C is delivered
/// as a key event instead of killing the process with echo still off.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Done,
    Interrupted,
}

/// Apply one key press to the masked input `line`.
fn apply_key(line: &mut String, key: KeyEvent) -> Step {
    if key.kind == KeyEventKind::Release {
        return Step::Continue;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Enter => Step::Done,
        KeyCode::Char('c') if ctrl => Step::Interrupted,
        KeyCode::Char('d') if ctrl && line.is_empty() => Step::Interrupted,
        KeyCode::Char(_) if ctrl => Step::Continue,
        KeyCode::Char(c) => {
            line.push(c);
            Step::Continue
        }
        KeyCode::Backspace => {
            line.pop();
            Step::Continue
        }
        _ => Step::Continue,
    }
}
