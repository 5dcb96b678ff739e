//! Tests for the selection strategies.

use paku::ErrorKind;
use paku::select::{PatternSelection, RegexSelection, SelectionStrategy};
use std::fs;
use tempfile::tempdir;

fn sorted_names(files: &[paku::FileRecord]) -> Vec<String> {
    let mut names: Vec<String> = files.iter().map(|f| f.name().to_string()).collect();
    names.sort();
    names
}

#[test]
fn pattern_matches_names_in_one_level() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.log"), "a").unwrap();
    fs::write(dir.path().join("b.log"), "bb").unwrap();
    fs::write(dir.path().join("c.txt"), "c").unwrap();
    fs::create_dir(dir.path().join("nested.log")).unwrap();
    fs::write(dir.path().join("nested.log").join("d.log"), "d").unwrap();

    let files = PatternSelection.select(dir.path(), "*.log").unwrap();
    assert_eq!(sorted_names(&files), ["a.log", "b.log"]);

    let b = files.iter().find(|f| f.name() == "b.log").unwrap();
    assert_eq!(b.len(), 2);
    assert_eq!(b.directory(), dir.path());
}

#[test]
fn pattern_question_mark() {
    let dir = tempdir().unwrap();
    for name in ["app-01.log", "app-1.log", "app-123.log"] {
        fs::write(dir.path().join(name), "").unwrap();
    }
    let files = PatternSelection.select(dir.path(), "app-??.log").unwrap();
    assert_eq!(sorted_names(&files), ["app-01.log"]);
}

#[test]
fn regex_searches_anywhere_in_the_name() {
    let dir = tempdir().unwrap();
    for name in ["foo.txt", "xfoo.txt", "bar.txt"] {
        fs::write(dir.path().join(name), "").unwrap();
    }

    let files = RegexSelection.select(dir.path(), "foo").unwrap();
    assert_eq!(sorted_names(&files), ["foo.txt", "xfoo.txt"]);

    let anchored = RegexSelection.select(dir.path(), "^foo").unwrap();
    assert_eq!(sorted_names(&anchored), ["foo.txt"]);
}

#[test]
fn regex_is_not_matched_against_the_directory() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("match-me");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("plain.txt"), "").unwrap();

    assert!(RegexSelection.select(&sub, "match").unwrap().is_empty());
}

#[test]
fn missing_directory_is_selection_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("gone");

    let err = PatternSelection.select(&missing, "*").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Selection);
    let err = RegexSelection.select(&missing, ".*").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Selection);
}

#[test]
fn invalid_patterns_are_parse_errors() {
    let dir = tempdir().unwrap();
    let err = RegexSelection.select(dir.path(), "(unclosed").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    let err = PatternSelection.select(dir.path(), "[").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}
