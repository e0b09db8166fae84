#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::Path;
use tempfile::TempDir;

pub fn tsheet() -> Command {
    cargo_bin_cmd!("tsheet")
}

/// Command running against the given home directory.
pub fn ts(home: &Path) -> Command {
    let mut cmd = tsheet();
    cmd.arg("--home").arg(home);
    cmd
}

/// Fresh, initialized home directory.
pub fn setup_home() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp home");
    ts(dir.path()).arg("init").assert().success();
    dir
}

/// Home with one hour-based sheet `GTA` (rate 10) and three entries
/// over two months.
pub fn home_with_data() -> TempDir {
    let dir = setup_home();
    let home = dir.path();

    ts(home)
        .args(["new", "GTA", "--rate", "10"])
        .assert()
        .success();

    for (date, dur, act) in [
        ("02 Mar 17", "2.5", "Coding"),
        ("15/3/2017", "0:45", "Meeting"),
        ("4 April 17", "1", "Review"),
    ] {
        ts(home)
            .args(["add", date, "--dur", dur, "--act", act])
            .assert()
            .success();
    }

    dir
}
