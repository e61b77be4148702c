#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER: &str = "session_id,snapshot_id,timestamp,duration_minutes,session_type,progress_status,blockers,issues_encountered,resolutions,session_focus,achievements,key_learnings,technical_details,session_notes";

/// Four snapshots over three sessions: two blocked, two with issues, one "Model" note.
pub const SAMPLE_ROWS: &str = "\
s1,snap1,2025-01-01T10:00,30,feature,in_progress,None,,,Build parser,Parsed headers,,,
s1,snap2,2025-01-01T11:00,,feature,completed,waiting on review,Flaky test,Pinned seed,Parser review,,,,Tried a new Model architecture
s2,snap3,2025-01-02T09:00,abc,bugfix,blocked,CI down,Build broke,None,Fix CI,,,,
s3,snap4,2025-01-03T09:00,20,,in_progress,,,,Docs,,,Rust docs,
";

/// Empty HOME so a developer's own config never leaks into tests
pub fn test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_vibestats_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path
}

pub fn vst(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("vibestats");
    cmd.env("HOME", test_home(name));
    cmd
}

/// Same as `vst` but with a caller-prepared HOME (e.g. holding a config file)
pub fn vst_with_home(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("vibestats");
    cmd.env("HOME", home);
    cmd
}

/// Write a config file into `home` and return its path
pub fn write_config(home: &Path, yaml: &str) -> PathBuf {
    let dir = home.join(".vibestats");
    fs::create_dir_all(&dir).expect("create config dir");
    let file = dir.join("vibestats.conf");
    fs::write(&file, yaml).expect("write config");
    file
}

pub fn csvclean(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("csvclean");
    cmd.env("HOME", test_home(name));
    cmd
}

/// Write `content` to a fresh file inside the system temp dir
pub fn write_temp(name: &str, ext: &str, content: &str) -> String {
    let p = temp_out(name, ext);
    fs::write(&p, content).expect("write temp file");
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_vibestats.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Sessions CSV with the standard header and the sample rows
pub fn sample_sessions_csv(name: &str) -> String {
    write_temp(name, "csv", &format!("{HEADER}\n{SAMPLE_ROWS}"))
}
