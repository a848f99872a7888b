// tests/integration/output_formats.rs
use serde_json::Value;

use crate::common::{CONVERSION, STATISTICS, WORD_COUNT, Workspace};

fn parse(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|e| panic!("invalid JSON ({e}): {text}"))
}

#[test]
fn statistics_as_json() {
    let ws = Workspace::new();
    ws.write("data.txt", "1\n2\n3\n");

    ws.command(STATISTICS).args(["--format", "json", "data.txt"]).assert().success();
    let value = parse(&ws.read("StatisticsResults.txt"));
    assert_eq!(value["file"], "data.txt");
    assert_eq!(value["statistics"]["count"], 3);
    assert_eq!(value["statistics"]["median"], 2.0);
    assert!(value["elapsed_seconds"].is_number());
}

#[test]
fn conversion_as_json_keeps_sentinel_rows() {
    let ws = Workspace::new();
    ws.write("numbers.txt", "7\nseven\n");

    ws.command(CONVERSION).args(["--format", "json", "numbers.txt"]).assert().success();
    let value = parse(&ws.read("ConvertionResults.txt"));
    assert_eq!(value["rows"][0]["binary"], "111");
    assert_eq!(value["rows"][1]["value"], "seven");
    assert_eq!(value["rows"][1]["hex"], "#VALUE!");
}

#[test]
fn output_flag_redirects_results_file() {
    let ws = Workspace::new();
    ws.write("words.txt", "a b a\n");

    ws.command(WORD_COUNT).args(["--output", "counts.json", "--format", "json", "words.txt"]).assert().success();
    assert!(!ws.exists("WordCountResults.txt"));
    let value = parse(&ws.read("counts.json"));
    assert_eq!(value["distinct_words"], 2);
    assert_eq!(value["words"][0]["word"], "a");
    assert_eq!(value["words"][0]["count"], 2);
}
