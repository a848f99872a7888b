// tests/integration/statistics.rs
use predicates::prelude::*;

use crate::common::{STATISTICS, Workspace, without_elapsed};

#[test]
fn reports_descriptive_statistics() {
    let ws = Workspace::new();
    ws.write("data.txt", "2\n4\n4\n4\n5\n5\n7\n9\n");

    let assert = ws.command(STATISTICS).arg("data.txt").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();

    let results = ws.read("StatisticsResults.txt");
    assert_eq!(stdout, results);
    assert_eq!(
        without_elapsed(&results),
        "File analyzed: data.txt\n\
         Valid data points: 8\n\
         \n\
         MEAN: 5.0\n\
         MEDIAN: 4.5\n\
         MODE: 4.0\n\
         POPULATION VARIANCE: 4.0\n\
         POPULATION STANDARD DEVIATION: 2.0\n\
         \n"
    );
    assert!(results.lines().last().is_some_and(|l| l.starts_with("Elapsed time: ") && l.ends_with(" seconds")));
}

#[test]
fn malformed_lines_are_skipped_with_a_diagnostic() {
    let ws = Workspace::new();
    ws.write("data.txt", "1\n\nabc\n3\n");

    ws.command(STATISTICS)
        .arg("data.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ERROR] Line 3: 'abc' is not a valid number. Skipped.\n"))
        .stdout(predicate::str::contains("Valid data points: 2\n"));

    let results = ws.read("StatisticsResults.txt");
    assert!(!results.contains("[ERROR]"));
    assert!(results.contains("MEAN: 2.0\n"));
}

#[test]
fn no_valid_data_exits_without_results_file() {
    let ws = Workspace::new();
    ws.write("data.txt", "x\ny\n\n");

    ws.command(STATISTICS)
        .arg("data.txt")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no valid data"));
    assert!(!ws.exists("StatisticsResults.txt"));
}

#[test]
fn empty_file_has_no_valid_data() {
    let ws = Workspace::new();
    ws.write("empty.txt", "");

    ws.command(STATISTICS).arg("empty.txt").assert().code(1);
    assert!(!ws.exists("StatisticsResults.txt"));
}

#[test]
fn unreadable_input_fails_on_stderr() {
    let ws = Workspace::new();

    ws.command(STATISTICS)
        .arg("missing.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.txt"));
    assert!(!ws.exists("StatisticsResults.txt"));
}

#[test]
fn existing_results_file_is_overwritten() {
    let ws = Workspace::new();
    ws.write("StatisticsResults.txt", "stale contents\n");
    ws.write("data.txt", "10\n");

    ws.command(STATISTICS).arg("data.txt").assert().success();
    let results = ws.read("StatisticsResults.txt");
    assert!(!results.contains("stale"));
    assert!(results.contains("MODE: 10.0\n"));
}
