use std::io::{Stdout, Write, stdout};

use anyhow::Result;
use colored::*;
use crossterm::{
    cursor::MoveToColumn,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, Clear, ClearType},
};

use crate::terminal::colors;

/// How the current buffer should be painted while the user types.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// Nothing worth judging yet.
    Neutral,
    Valid,
    Invalid,
}

pub enum LineOutcome {
    Entered(String),
    Cancelled,
}

/// Restores the terminal even when a read bails out early.
struct RawMode;

impl RawMode {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Reads one line, repainting it on every keystroke in the color the judge
/// assigns to the buffer so far.
///
/// Enter submits the buffer as-is, Esc clears it, Ctrl+C / Ctrl+D end the
/// session. Anything else the terminal reports (function keys, arrows) is
/// ignored.
pub fn read_line_validated(prompt: &str, judge: impl Fn(&str) -> Validity) -> Result<LineOutcome> {
    let _guard = RawMode::enter()?;
    let mut out = stdout();
    let mut buffer = String::new();

    render(&mut out, prompt, &buffer, judge(&buffer))?;

    loop {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event::read()?
        else {
            continue;
        };

        if kind != KeyEventKind::Press {
            continue;
        }

        match code {
            KeyCode::Char('c') | KeyCode::Char('d')
                if modifiers.contains(KeyModifiers::CONTROL) =>
            {
                finish_line(&mut out)?;
                return Ok(LineOutcome::Cancelled);
            }
            KeyCode::Enter => {
                finish_line(&mut out)?;
                return Ok(LineOutcome::Entered(buffer));
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Esc => buffer.clear(),
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => buffer.push(c),
            _ => {}
        }

        render(&mut out, prompt, &buffer, judge(&buffer))?;
    }
}

fn render(out: &mut Stdout, prompt: &str, buffer: &str, validity: Validity) -> Result<()> {
    execute!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;

    let styled: ColoredString = match validity {
        Validity::Neutral => buffer.color(colors::TEXT_DEFAULT),
        Validity::Valid => buffer.color(colors::VALID),
        Validity::Invalid => buffer.color(colors::INVALID),
    };
    let marker: ColoredString = match validity {
        Validity::Neutral => "".normal(),
        Validity::Valid => " ✓".color(colors::VALID),
        Validity::Invalid => " ✗".color(colors::INVALID),
    };

    write!(out, "{}{}{}", prompt.color(colors::ACCENT), styled, marker)?;

    // Park the cursor right behind the text, in front of the marker.
    let column = (prompt.chars().count() + buffer.chars().count()) as u16;
    execute!(out, MoveToColumn(column))?;

    out.flush()?;
    Ok(())
}

fn finish_line(out: &mut Stdout) -> Result<()> {
    write!(out, "\r\n")?;
    out.flush()?;
    Ok(())
}
