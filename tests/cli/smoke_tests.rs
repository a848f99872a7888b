use predicates::prelude::*;

use crate::common::{CONVERSION, STATISTICS, WORD_COUNT, Workspace};

#[test]
fn shows_help() {
    let ws = Workspace::new();
    ws.command(STATISTICS)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compute_statistics"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn missing_argument_prints_usage_on_stdout() {
    for (program, name, results) in [
        (STATISTICS, "compute_statistics", "StatisticsResults.txt"),
        (CONVERSION, "convert_numbers", "ConvertionResults.txt"),
        (WORD_COUNT, "word_count", "WordCountResults.txt"),
    ] {
        let ws = Workspace::new();
        ws.command(program).assert().code(1).stdout(predicate::str::contains(format!("Usage: {name} <file>")));
        assert!(!ws.exists(results));
    }
}

#[test]
fn unknown_format_is_rejected_by_clap() {
    let ws = Workspace::new();
    ws.write("data.txt", "1\n");
    ws.command(STATISTICS)
        .args(["--format", "xml", "data.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xml"));
    assert!(!ws.exists("StatisticsResults.txt"));
}

#[test]
fn logging_stays_off_stdout() {
    let ws = Workspace::new();
    ws.write("data.txt", "1\nbad\n");
    let assert = ws.command(STATISTICS).env("LINESTAT_LOG", "debug").arg("data.txt").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(stdout.starts_with("[ERROR] Line 2: 'bad' is not a valid number. Skipped.\n"));
    assert!(!stdout.contains("DEBUG"));
}

#[test]
fn output_equal_to_input_is_refused() {
    let ws = Workspace::new();
    ws.write("data.txt", "1\n");
    ws.command(STATISTICS)
        .args(["--output", "data.txt", "data.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--output"));
    assert_eq!(ws.read("data.txt"), "1\n");
}

#[test]
fn input_named_like_default_results_file_is_processed() {
    let ws = Workspace::new();
    ws.write("WordCountResults.txt", "one two two\n");
    ws.command(WORD_COUNT).arg("WordCountResults.txt").assert().success();

    let results = ws.read("WordCountResults.txt");
    assert!(results.starts_with("File analyzed: WordCountResults.txt\n"));
    assert!(results.contains("two\t2\n"));
}
