// tests/integration/word_count.rs
use predicates::prelude::*;

use crate::common::{WORD_COUNT, Workspace, without_elapsed};

#[test]
fn counts_normalised_words_in_order() {
    let ws = Workspace::new();
    ws.write("words.txt", "The cat sat.\nThe CAT ran!\n");

    ws.command(WORD_COUNT).arg("words.txt").assert().success();

    assert_eq!(
        without_elapsed(&ws.read("WordCountResults.txt")),
        "File analyzed: words.txt\n\
         Tokens read: 6\n\
         Valid words: 6\n\
         Distinct words: 4\n\
         \n\
         WORD\tCOUNT\n\
         cat\t2\n\
         ran\t1\n\
         sat\t1\n\
         the\t2\n\
         \n"
    );
}

#[test]
fn punctuation_only_tokens_are_reported() {
    let ws = Workspace::new();
    ws.write("words.txt", "hello --- world\n");

    ws.command(WORD_COUNT)
        .arg("words.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ERROR] Line 1: invalid token '---'. Skipped.\n"))
        .stdout(predicate::str::contains("Tokens read: 3\nValid words: 2\n"));
}

#[test]
fn empty_file_gives_an_empty_table() {
    let ws = Workspace::new();
    ws.write("words.txt", "");

    ws.command(WORD_COUNT).arg("words.txt").assert().success();
    assert!(ws.read("WordCountResults.txt").contains("Distinct words: 0\n\nWORD\tCOUNT\n\n"));
}
