//! Coloured one-line status messages for the CLI.
//! Colours are dropped when `NO_COLOR` is set or stdout is not a terminal.

use std::fmt;
use std::io::IsTerminal;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn colour(self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

fn colours_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

fn format_line(level: Level, msg: &dyn fmt::Display, colour: bool) -> String {
    if colour {
        format!("{}{}{} {}{}", level.colour(), BOLD, level.icon(), RESET, msg)
    } else {
        format!("{} {}", level.icon(), msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", format_line(Level::Info, &msg, colours_enabled()));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", format_line(Level::Success, &msg, colours_enabled()));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", format_line(Level::Warning, &msg, colours_enabled()));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", format_line(Level::Error, &msg, colours_enabled()));
}
