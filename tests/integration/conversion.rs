// tests/integration/conversion.rs
use predicates::prelude::*;

use crate::common::{CONVERSION, Workspace, without_elapsed};

#[test]
fn converts_each_line_and_substitutes_sentinel() {
    let ws = Workspace::new();
    ws.write("numbers.txt", "-5\nabc\n10\n");

    ws.command(CONVERSION)
        .arg("numbers.txt")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "[ERROR] Line 2: 'abc' is not a valid integer. Using #VALUE! and continuing.\n",
        ));

    assert_eq!(
        without_elapsed(&ws.read("ConvertionResults.txt")),
        "File analyzed: numbers.txt\n\
         \n\
         ITEM\tVALUE\tBIN\tHEX\n\
         1\t-5\t1111111011\tFFFFFFFFFB\n\
         2\tabc\t#VALUE!\t#VALUE!\n\
         3\t10\t1010\tA\n\
         \n"
    );
}

#[test]
fn blank_lines_do_not_consume_item_numbers() {
    let ws = Workspace::new();
    ws.write("numbers.txt", "0\n\n   \n255\n");

    ws.command(CONVERSION).arg("numbers.txt").assert().success();
    let results = ws.read("ConvertionResults.txt");
    assert!(results.contains("1\t0\t0\t0\n"));
    assert!(results.contains("2\t255\t11111111\tFF\n"));
}

#[test]
fn all_invalid_input_still_produces_a_table() {
    let ws = Workspace::new();
    ws.write("numbers.txt", "1.5\n");

    ws.command(CONVERSION).arg("numbers.txt").assert().success();
    assert!(ws.read("ConvertionResults.txt").contains("1\t1.5\t#VALUE!\t#VALUE!\n"));
}
