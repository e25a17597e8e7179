//! Integration tests for asciicast parsing and serialization

use std::collections::BTreeMap;

use tdr::{CastFile, Event, Header};

use crate::helpers::{load_fixture, temp_fixture};

#[test]
fn parses_the_checked_in_fixture() {
    let cast = CastFile::parse_str(&load_fixture("sample.cast")).unwrap();

    assert_eq!(cast.header.version, 2);
    assert_eq!(cast.header.width, 80);
    assert_eq!(cast.header.height, 24);
    assert_eq!(cast.header.title, "Fixture session");
    assert_eq!(cast.events.len(), 3);
    assert!((cast.duration() - 0.8).abs() < 1e-9);
}

#[test]
fn fixture_roundtrips_byte_identically() {
    let original = load_fixture("sample.cast");
    let cast = CastFile::parse_str(&original).unwrap();

    assert_eq!(cast.to_string().unwrap(), original);
}

#[test]
fn parse_reads_from_disk() {
    let (temp_dir, path) = temp_fixture("sample.cast");
    let cast = CastFile::parse(&path).unwrap();

    assert_eq!(cast.events.len(), 3);
    assert_eq!(cast.events[1].data, "make check\r\n");

    drop(temp_dir);
}

#[test]
fn missing_file_error_names_the_path() {
    let err = CastFile::parse("/nonexistent/path/file.cast").unwrap_err();
    assert!(format!("{:#}", err).contains("file.cast"));
}

#[test]
fn constructed_session_serializes_byte_exactly() {
    let mut env = BTreeMap::new();
    env.insert("SHELL".to_string(), "/bin/zsh".to_string());

    let mut cast = CastFile::new(Header::new(100, 30, 1700000000, "Scripted", env));
    cast.events.push(Event::output(0.5, "$ "));
    cast.events.push(Event::output(0.55, "l"));
    cast.events.push(Event::output(0.6, "s"));
    cast.events.push(Event::output(1.1, "\r\ntotal 0\r\n"));

    let expected = concat!(
        r#"{"version":2,"width":100,"height":30,"timestamp":1700000000,"title":"Scripted","env":{"SHELL":"/bin/zsh"}}"#,
        "\n",
        r#"[0.5,"o","$ "]"#,
        "\n",
        r#"[0.55,"o","l"]"#,
        "\n",
        r#"[0.6,"o","s"]"#,
        "\n",
        r#"[1.1,"o","\r\ntotal 0\r\n"]"#,
        "\n",
    );

    assert_eq!(cast.to_string().unwrap(), expected);
}

#[test]
fn write_creates_a_parseable_file() {
    let (temp_dir, _path) = temp_fixture("sample.cast");
    let out_path = temp_dir.path().join("written.cast");

    let cast = CastFile::parse_str(&load_fixture("sample.cast")).unwrap();
    cast.write(&out_path).unwrap();

    let reparsed = CastFile::parse(&out_path).unwrap();
    assert_eq!(reparsed.header, cast.header);
    assert_eq!(reparsed.events.len(), cast.events.len());

    drop(temp_dir);
}
