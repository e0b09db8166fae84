use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{home_with_data, setup_home, ts};

#[test]
fn init_creates_config_and_sheets_dir() {
    let dir = tempfile::tempdir().unwrap();
    ts(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(dir.path().join("tsheet.conf").exists());
    assert!(dir.path().join("sheets").is_dir());
}

#[test]
fn new_sheet_becomes_current() {
    let dir = setup_home();
    let home = dir.path();

    ts(home)
        .args(["new", "Game Tester", "--rate", "12.5", "--currency", "$"])
        .assert()
        .success()
        .stdout(contains("Game_Tester"));
    ts(home).args(["new", "Other", "--rate", "9"]).assert().success();
    ts(home).args(["open", "game_tester"]).assert().success();

    ts(home)
        .arg("sheets")
        .assert()
        .success()
        .stdout(contains("* Game_Tester").and(contains("  Other")));

    ts(home)
        .args(["new", "other", "--rate", "9"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn commands_need_a_sheet() {
    let dir = setup_home();
    ts(dir.path())
        .args(["add", "--dur", "1", "--act", "x"])
        .assert()
        .failure()
        .stderr(contains("No timesheet selected"));
}

#[test]
fn summary_groups_months_with_totals() {
    let dir = home_with_data();

    ts(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(
            contains("April 2017")
                .and(contains("Time: 1:00 hours;"))
                .and(contains("Pay: £10.00"))
                .and(contains("March 2017"))
                .and(contains("Time: 3:15 hours;"))
                .and(contains("Pay: £32.50"))
                .and(contains("02 Mar 17"))
                .and(contains("Rate (£)")),
        );

    ts(dir.path())
        .args(["summary", "--period", "2017-04"])
        .assert()
        .success()
        .stdout(contains("April 2017").and(contains("March 2017").not()));
}

#[test]
fn empty_sheet_summary_prints_hint() {
    let dir = setup_home();
    ts(dir.path()).args(["new", "Empty", "--rate", "1"]).assert().success();
    ts(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("There are no entries to display"));
}

#[test]
fn add_rejects_bad_input() {
    let dir = home_with_data();
    let home = dir.path();

    ts(home)
        .args(["add", "31 Feb 2020", "--dur", "1", "--act", "x"])
        .assert()
        .failure()
        .stderr(contains("Cannot format '31 Feb 2020' as date"));

    ts(home)
        .args(["add", "1", "--dur", "lots", "--act", "x"])
        .assert()
        .failure()
        .stderr(contains("as duration"));

    ts(home)
        .args(["add", "1", "--dur", "1", "--act", "x", "--rate=-3"])
        .assert()
        .failure()
        .stderr(contains("Invalid rate"));

    ts(home)
        .arg("entries")
        .assert()
        .success()
        .stdout(contains("Review").and(contains("x").not()));
}

#[test]
fn edit_and_delete_entries() {
    let dir = home_with_data();
    let home = dir.path();

    ts(home)
        .args(["edit", "2", "--dur", "1:30", "--act", "Standup"])
        .assert()
        .success()
        .stdout(contains("01:30"));

    ts(home)
        .args(["del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("1 entry deleted"));

    ts(home).args(["del", "9", "--yes"]).assert().failure();

    let csv = fs::read_to_string(home.join("sheets/GTA.csv")).unwrap();
    assert_eq!(
        csv,
        "Date,Duration,Activity,Rate\n2017-03-15,01:30,Standup,10\n2017-04-04,01:00,Review,10\n"
    );
}

#[test]
fn activities_are_distinct_and_sorted() {
    let dir = home_with_data();
    ts(dir.path())
        .args(["add", "3 3 17", "--dur", "1", "--act", "Coding"])
        .assert()
        .success();

    let out = ts(dir.path()).arg("activities").assert().success();
    let stdout = String::from_utf8(out.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout, "Coding\nMeeting\nReview\n");
}

#[test]
fn settings_rename_and_change_currency() {
    let dir = home_with_data();
    let home = dir.path();

    ts(home)
        .args(["settings", "--name", "GTA 2", "--currency", "€"])
        .assert()
        .success();

    assert!(home.join("sheets/GTA_2.csv").exists());
    ts(home)
        .args(["--sheet", "GTA_2", "summary"])
        .assert()
        .success()
        .stdout(contains("Pay: €10.00"));

    ts(home)
        .arg("settings")
        .assert()
        .success()
        .stdout(contains("GTA_2").and(contains("€")));
}

#[test]
fn remove_sheet() {
    let dir = home_with_data();
    let home = dir.path();

    ts(home).args(["remove", "gta", "--yes"]).assert().success();
    assert!(!home.join("sheets/GTA.csv").exists());
    ts(home)
        .arg("sheets")
        .assert()
        .success()
        .stdout(contains("There are no timesheets"));
}

#[test]
fn remove_several_sheets_checks_all_names_first() {
    let dir = home_with_data();
    let home = dir.path();
    ts(home).args(["new", "Other", "--rate", "5"]).assert().success();

    ts(home)
        .args(["remove", "gta", "missing", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No timesheet named 'missing'"));
    assert!(home.join("sheets/GTA.csv").exists());

    ts(home)
        .args(["remove", "gta", "other", "--yes"])
        .assert()
        .success()
        .stdout(contains("'GTA' has been deleted").and(contains("'Other' has been deleted")));
    assert!(!home.join("sheets/GTA.csv").exists());
    assert!(!home.join("sheets/Other.csv").exists());
}

#[test]
fn config_check_reports_orphans() {
    let dir = home_with_data();
    fs::write(dir.path().join("sheets/stray.csv"), "").unwrap();

    ts(dir.path())
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("stray.csv"));

    ts(dir.path())
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("GTA").and(contains("timebase: hour")));
}

#[test]
fn journal_records_operations() {
    let dir = home_with_data();
    ts(dir.path())
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("new (GTA)").and(contains("add (GTA)")));
}
