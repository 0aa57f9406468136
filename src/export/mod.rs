// src/export/mod.rs

pub mod csv;
pub mod html;

pub use self::csv::{read_detailed, read_individual, write_detailed, write_report, write_violations};

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// Writer for an output channel: `"-"` selects stdout.
pub fn out_writer(path: &str, force: bool) -> AppResult<Box<dyn Write>> {
    if path == "-" {
        return Ok(Box::new(io::stdout()));
    }
    let p = Path::new(path);
    ensure_writable(p, force)?;
    Ok(Box::new(File::create(p)?))
}

/// Writer for the violations channel: `"-"` selects stderr, keeping the
/// data-quality stream out of the main report.
pub fn err_writer(path: &str, force: bool) -> AppResult<Box<dyn Write>> {
    if path == "-" {
        return Ok(Box::new(io::stderr()));
    }
    let p = Path::new(path);
    ensure_writable(p, force)?;
    Ok(Box::new(File::create(p)?))
}

/// Reader for an input channel: `"-"` selects stdin.
pub fn in_reader(path: &str) -> AppResult<Box<dyn Read>> {
    if path == "-" {
        return Ok(Box::new(io::stdin()));
    }
    Ok(Box::new(File::open(path)?))
}

/// Refuse to overwrite an existing file unless `force` is set.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "output file already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }
    Ok(())
}

/// Completion message, skipped when the report went to a standard stream.
pub(crate) fn notify_export_success(label: &str, path: &str) {
    if path != "-" {
        success(format!("{label} written: {path}"));
    }
}
