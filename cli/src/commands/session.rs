//! Interactive mode: load a number once, then poke at it.
//!
//! The session keeps a single loaded number as its state. Typing digits
//! replaces it, keyword commands run operations against it, and `rev!`
//! mutates it in place. Input is repainted live with a validity color while
//! the user types.

use std::time::{Duration, Instant};

use anyhow::Result;
use colored::*;
use numflip_core::{config::Config, natural::NaturalNumber, success};
use tracing::{error, warn};

use crate::commands::{digit, inspect, reverse, zeros};
use crate::terminal::{
    colors, format,
    input::{self, LineOutcome, Validity},
    print,
};

/// One parsed session line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Load(String),
    Zeros,
    Digit(isize),
    Reversed,
    ReverseInPlace,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Keywords win; any other line is treated as a number to load, so a
    /// failed construction can report the user's own text back.
    fn parse(line: &str) -> Result<Self, String> {
        let mut tokens = line.split_whitespace();
        let Some(head) = tokens.next() else {
            return Err("nothing to do".to_string());
        };
        let arg = tokens.next();

        let command = match head.to_ascii_lowercase().as_str() {
            "zeros" | "z" => Self::Zeros,
            "digit" | "d" => {
                let Some(raw) = arg else {
                    return Err("digit needs a position, e.g. `digit 2`".to_string());
                };
                let index: isize = raw
                    .parse()
                    .map_err(|_| format!("`{raw}` is not a usable position"))?;
                if tokens.next().is_some() {
                    return Err("digit takes a single position".to_string());
                }
                Self::Digit(index)
            }
            "rev" | "reversed" => Self::Reversed,
            "rev!" | "reverse!" => Self::ReverseInPlace,
            "show" | "value" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Ok(Self::Load(line.to_string())),
        };

        if !matches!(command, Self::Digit(_)) && arg.is_some() {
            return Err(format!("`{head}` takes no arguments"));
        }

        Ok(command)
    }
}

pub fn run(cfg: &Config) -> Result<()> {
    print::banner(cfg.quiet);
    print::print_status("type a number to load it, `help` for the command list");

    let mut current: Option<NaturalNumber> = None;
    let mut operations: usize = 0;
    let started = Instant::now();

    loop {
        let line = match input::read_line_validated("numflip> ", judge)? {
            LineOutcome::Entered(line) => line,
            LineOutcome::Cancelled => break,
        };
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        match Command::parse(line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => help(),
            Ok(Command::Load(text)) => match NaturalNumber::from_text(&text) {
                Ok(number) => {
                    success!("loaded {} ({})", number, format::digit_count(number.len()));
                    current = Some(number);
                }
                Err(err) => error!("{err}"),
            },
            Ok(Command::Show) => {
                with_number(&current, |number| inspect::inspect(number, cfg));
            }
            Ok(Command::Zeros) => {
                if with_number(&current, |number| zeros::zeros(number, cfg)) {
                    operations += 1;
                }
            }
            Ok(Command::Digit(index)) => {
                if with_number(&current, |number| digit::digit(number, index, cfg)) {
                    operations += 1;
                }
            }
            Ok(Command::Reversed) => {
                if with_number(&current, |number| reverse::reverse(number, cfg)) {
                    operations += 1;
                }
            }
            Ok(Command::ReverseInPlace) => match current.as_mut() {
                Some(number) => {
                    number.reverse_in_place();
                    operations += 1;
                    success!("number is now {number}");
                }
                None => warn!("no number loaded yet, type one first"),
            },
            Err(reason) => error!("{reason}"),
        }
    }

    session_summary(operations, started.elapsed(), cfg);
    Ok(())
}

/// Mirrors the disabled operation buttons of a UI: operations simply refuse
/// to run until a number has been loaded.
fn with_number(current: &Option<NaturalNumber>, op: impl FnOnce(&NaturalNumber)) -> bool {
    match current {
        Some(number) => {
            op(number);
            true
        }
        None => {
            warn!("no number loaded yet, type one first");
            false
        }
    }
}

fn judge(line: &str) -> Validity {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Validity::Neutral;
    }
    if NaturalNumber::is_valid_natural_number(trimmed) {
        return Validity::Valid;
    }

    match Command::parse(trimmed) {
        Ok(Command::Load(_)) | Err(_) => Validity::Invalid,
        Ok(_) => Validity::Valid,
    }
}

fn help() {
    let entries = [
        ("<number>", "load a natural number"),
        ("show", "everything known about the loaded number"),
        ("zeros", "count its zero digits"),
        ("digit <i>", "digit at position i, 0 = most significant"),
        ("rev", "print the reversed value"),
        ("rev!", "reverse the loaded number itself"),
        ("quit", "leave the session"),
    ];

    let keys: Vec<&str> = entries.iter().map(|(key, _)| *key).collect();
    print::set_key_width(&keys);

    for (key, description) in entries {
        print::aligned_line(key, description.dimmed());
    }
}

fn session_summary(operations: usize, total_time: Duration, cfg: &Config) {
    let unit: &str = if operations == 1 {
        "operation"
    } else {
        "operations"
    };
    let count: ColoredString = format!("{operations} {unit}").bold().green();
    let total_time: ColoredString = format!("{:.1}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString =
        format!("Session closed: {count} in {total_time}").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&format!("{output}"));
            print::end_of_program();
        }
        _ => success!("{}", output),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
