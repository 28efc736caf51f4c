#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Binary under test, with its configuration directory pinned to `home`.
pub fn att(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("attendlog");
    cmd.env("ATTENDLOG_HOME", home);
    cmd
}

/// Fresh temp dir plus the path of a (not yet existing) table inside it.
pub fn temp_table(name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(format!("{}.csv", name));
    (dir, path)
}

pub fn path_str(p: &Path) -> String {
    p.to_string_lossy().to_string()
}

pub fn read(p: &Path) -> String {
    fs::read_to_string(p).expect("read file")
}

/// Non-header lines of a table file.
pub fn data_lines(p: &Path) -> Vec<String> {
    read(p).lines().skip(1).map(str::to_string).collect()
}
