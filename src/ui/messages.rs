//! User-facing console messages.
//!
//! Everything goes to stderr: stdout is a data channel when a report is
//! written to `-`.

use ansi_term::Colour;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

/// 0 = quiet, 1 = normal, 2+ = debug.
static VERBOSITY: AtomicU8 = AtomicU8::new(1);

pub fn set_verbosity(level: u8) {
    VERBOSITY.store(level, Ordering::Relaxed);
}

fn level() -> u8 {
    VERBOSITY.load(Ordering::Relaxed)
}

pub fn info<T: fmt::Display>(msg: T) {
    if level() >= 1 {
        eprintln!("{} {}", Colour::Blue.bold().paint("ℹ️"), msg);
    }
}

pub fn success<T: fmt::Display>(msg: T) {
    if level() >= 1 {
        eprintln!("{} {}", Colour::Green.bold().paint("✅"), msg);
    }
}

pub fn warning<T: fmt::Display>(msg: T) {
    if level() >= 1 {
        eprintln!("{} {}", Colour::Yellow.bold().paint("⚠️"), msg);
    }
}

/// Errors are never muted.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Colour::Red.bold().paint("❌"), msg);
}

pub fn debug<T: fmt::Display>(msg: T) {
    if level() >= 2 {
        eprintln!("{} {}", Colour::White.dimmed().paint("·"), msg);
    }
}
