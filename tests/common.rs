#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tgr() -> Command {
    let mut cmd = cargo_bin_cmd!("togglrep");
    // keep the default config lookup away from the real home directory
    cmd.env("HOME", env::temp_dir());
    cmd
}

/// Create a unique temp file path and remove any leftover from earlier runs
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_togglrep.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write fixture content to a unique temp file and return its path
pub fn write_fixture(name: &str, content: &str) -> String {
    let path = temp_out(name, "csv");
    fs::write(&path, content).expect("write fixture");
    path
}

/// Detailed CSV with a bit of everything: a clean record, a missing project,
/// a too-long entry and an overlapping one, plus a second team.
pub fn mixed_detailed_csv() -> &'static str {
    "user,team,project,start,duration_hours\n\
     alice,TeamA,Core,2024-02-05T09:00:00,4\n\
     alice,TeamA,,2024-02-05T14:00:00,3\n\
     bob,TeamA,Core,2024-02-06T09:00:00,12\n\
     bob,TeamA,Core,2024-02-06T10:00:00,2\n\
     carol,TeamB,Extra,2024-02-12T09:00:00,5\n"
}
