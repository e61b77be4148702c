//! Status lines for the two binaries: an icon painted in the level's colour,
//! then the message. Report text never goes through here (see `ui::sink`).

use ansi_term::Colour;
use std::fmt;

#[derive(Debug, Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn colour(self) -> Colour {
        match self {
            Level::Info => Colour::Blue,
            Level::Success => Colour::Green,
            Level::Warning => Colour::Yellow,
            Level::Error => Colour::Red,
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

fn line<T: fmt::Display>(level: Level, msg: T) -> String {
    format!("{} {}", level.colour().bold().paint(level.icon()), msg)
}

/// Progress of a long step (stdout).
pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Info, msg));
}

/// Completed step (stdout).
pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Success, msg));
}

/// Recoverable oddity in the input (stderr, keeps stdout clean for reports).
pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Level::Warning, msg));
}

/// Fatal error just before exit (stderr).
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Level::Error, msg));
}
