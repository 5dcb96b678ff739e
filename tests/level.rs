//! Tests for Level parsing and ordering.

use paku::Level;

#[test]
fn parse_is_case_insensitive_with_aliases() {
    assert_eq!("TRACE".parse::<Level>().unwrap(), Level::Trace);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert!("verbose".parse::<Level>().is_err());
}

#[test]
fn ordering_follows_severity() {
    assert!(Level::Trace < Level::Debug);
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warn);
    assert!(Level::Warn < Level::Error);
}

#[test]
fn display_and_tag() {
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Warn.tag(), "WARN");
}
