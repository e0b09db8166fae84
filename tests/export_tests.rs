use predicates::str::contains;
use std::fs;

mod common;
use common::{home_with_data, ts};

#[test]
fn export_entries_csv() {
    let dir = home_with_data();
    let out = dir.path().join("out.csv");

    ts(dir.path())
        .args(["export", "--format", "csv", "--file"])
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("id,date,duration,activity,rate,pay"));
    assert_eq!(lines.next(), Some("1,2017-03-02,02:30,Coding,10.00,25.00"));
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn export_summary_json_with_range() {
    let dir = home_with_data();
    let out = dir.path().join("summary.json");

    ts(dir.path())
        .args(["export", "--format", "json", "--summary", "--range", "2017-03", "--file"])
        .arg(&out)
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let months = json.as_array().unwrap();
    assert_eq!(months.len(), 1);
    assert_eq!(months[0]["label"], "March 2017");
    assert_eq!(months[0]["total_time"], "3:15");
    assert_eq!(months[0]["total_pay"], "£32.50");
    assert_eq!(months[0]["rows"].as_array().unwrap().len(), 2);
}

#[test]
fn export_summary_csv() {
    let dir = home_with_data();
    let out = dir.path().join("months.csv");

    ts(dir.path())
        .args(["export", "--summary", "--file"])
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(
        content,
        "month,year,entries,total_time,total_pay\nApril 2017,2017,1,1:00,10.00\nMarch 2017,2017,2,3:15,32.50\n"
    );
}

#[test]
fn export_raw_copies_the_sheet() {
    let dir = home_with_data();
    let out = dir.path().join("raw.csv");

    ts(dir.path())
        .args(["export", "--raw", "--file"])
        .arg(&out)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        fs::read_to_string(dir.path().join("sheets/GTA.csv")).unwrap()
    );
}

#[test]
fn export_refuses_relative_paths_and_bad_ranges() {
    let dir = home_with_data();

    ts(dir.path())
        .args(["export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));

    ts(dir.path())
        .args(["export", "--range", "2017-3", "--file"])
        .arg(dir.path().join("x.csv"))
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}

#[test]
fn export_empty_range_writes_nothing() {
    let dir = home_with_data();
    let out = dir.path().join("none.csv");

    ts(dir.path())
        .args(["export", "--range", "2020", "--file"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("No entries found"));

    assert!(!out.exists());
}

#[test]
fn backup_to_zip() {
    let dir = home_with_data();
    let out = dir.path().join("backup/tsheet-backup");

    ts(dir.path())
        .args(["backup", "--compress", "--file"])
        .arg(&out)
        .assert()
        .success();

    assert!(dir.path().join("backup/tsheet-backup.zip").exists());
}

#[test]
fn backup_to_directory() {
    let dir = home_with_data();
    let out = dir.path().join("copy");

    ts(dir.path())
        .args(["backup", "--file"])
        .arg(&out)
        .assert()
        .success();

    assert!(out.join("tsheet.conf").exists());
    assert!(out.join("sheets/GTA.csv").exists());
}
