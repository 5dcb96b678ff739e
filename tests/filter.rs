//! Tests for the filter strategies.

use paku::filter::{AgeFilter, AllFilter, CapFilter, FilterStrategy};
use paku::rules::AgeRule;
use paku::{ErrorKind, FileRecord};
use std::time::{Duration, SystemTime};

fn record(name: &str, created_secs: u64) -> FileRecord {
    let t = SystemTime::UNIX_EPOCH + Duration::from_secs(created_secs);
    FileRecord::from_path(format!("/data/{name}"))
        .unwrap()
        .with_created(t)
        .with_modified(t)
}

fn names(files: &[FileRecord]) -> Vec<&str> {
    files.iter().map(FileRecord::name).collect()
}

#[test]
fn all_filter_passes_everything_through() {
    let files = vec![record("a", 1), record("b", 2)];
    let kept = AllFilter.filter(files.clone(), "ignored").unwrap();
    assert_eq!(kept, files);
}

#[test]
fn age_filter_threshold() {
    let now = SystemTime::UNIX_EPOCH + Duration::from_secs(100_000);
    let files = vec![
        record("old", 100_000 - 10 * 3600),
        record("young", 100_000 - 3600),
    ];

    let older = AgeFilter::filter_at(files.clone(), &"cdate>8h".parse().unwrap(), now);
    assert_eq!(names(&older), ["old"]);

    let younger = AgeFilter::filter_at(files, &"cdate<8h".parse().unwrap(), now);
    assert_eq!(names(&younger), ["young"]);
}

#[test]
fn age_filter_excludes_future_dated_files() {
    let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
    let files = vec![record("future", 2_000)];
    for op in ["<", "<=", "=", ">=", ">"] {
        let rule: AgeRule = format!("mdate{op}1s").parse().unwrap();
        assert!(AgeFilter::filter_at(files.clone(), &rule, now).is_empty(), "{op}");
    }
}

#[test]
fn age_filter_zero_age_depends_only_on_operator() {
    let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
    let files = vec![record("now", 1_000)];
    for threshold in ["0s", "5m", "2d"] {
        for (op, expected) in [("=", 1), (">=", 1), ("<=", 1), ("<", 0), (">", 0)] {
            let rule: AgeRule = format!("cdate{op}{threshold}").parse().unwrap();
            assert_eq!(
                AgeFilter::filter_at(files.clone(), &rule, now).len(),
                expected,
                "{op}{threshold}"
            );
        }
    }
}

#[test]
fn age_filter_equal_never_matches_non_zero_age() {
    let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
    let files = vec![record("exact", 1_000 - 60)];
    assert!(AgeFilter::filter_at(files, &"cdate=1m".parse().unwrap(), now).is_empty());
}

#[test]
fn age_filter_bad_params_is_parse_error() {
    let err = AgeFilter.filter(vec![record("a", 1)], "yesterday").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

fn cap_input() -> Vec<FileRecord> {
    vec![
        record("abc.txt", 40),
        record("bar.txt", 30),
        record("baz.txt", 20),
        record("buz.txt", 10),
    ]
}

#[test]
fn cap_spares_the_first_n_of_the_ordering() {
    let beyond = CapFilter.filter(cap_input(), "2 name desc").unwrap();
    assert_eq!(names(&beyond), ["bar.txt", "abc.txt"]);

    let beyond = CapFilter.filter(cap_input(), "1 cdate").unwrap();
    assert_eq!(names(&beyond), ["baz.txt", "bar.txt", "abc.txt"]);
}

#[test]
fn cap_zero_returns_whole_sorted_list() {
    let all = CapFilter.filter(cap_input(), "0 name").unwrap();
    assert_eq!(names(&all), ["abc.txt", "bar.txt", "baz.txt", "buz.txt"]);
}

#[test]
fn cap_beyond_length_returns_nothing() {
    assert!(CapFilter.filter(cap_input(), "4 name").unwrap().is_empty());
    assert!(CapFilter.filter(cap_input(), "99 mdate desc").unwrap().is_empty());
}

#[test]
fn cap_sort_is_stable_in_both_directions() {
    let files = vec![record("first", 5), record("second", 5), record("third", 1)];

    let asc = CapFilter::apply(files.clone(), &"0 cdate".parse().unwrap());
    assert_eq!(names(&asc), ["third", "first", "second"]);

    let desc = CapFilter::apply(files, &"0 cdate desc".parse().unwrap());
    assert_eq!(names(&desc), ["first", "second", "third"]);
}

#[test]
fn cap_name_order_interleaves_case() {
    let files = vec![
        record("Bar.txt", 1),
        record("abc.txt", 2),
        record("baz.txt", 3),
        record("Abc.txt", 4),
    ];

    let asc = CapFilter.filter(files.clone(), "0 name").unwrap();
    assert_eq!(names(&asc), ["Abc.txt", "abc.txt", "Bar.txt", "baz.txt"]);

    let beyond = CapFilter.filter(files, "2 name desc").unwrap();
    assert_eq!(names(&beyond), ["abc.txt", "Abc.txt"]);
}
