//! Loading lookup tables from resource files.

use std::fs;

use libperturb::prelude::*;
use libperturb::tables::{KEYBOARD_FILE, NATURAL_FILE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

fn write_tables(dir: &TempDir, keyboard: &str, natural: &str) {
    fs::write(dir.path().join(KEYBOARD_FILE), keyboard).unwrap();
    fs::write(dir.path().join(NATURAL_FILE), natural).unwrap();
}

#[test]
fn test_load_from_dir() {
    let dir = TempDir::new().unwrap();
    write_tables(&dir, "q w a s\nw q e\n", "their thier\nwhich wich whitch\n");

    let tables = LookupTables::from_dir(dir.path()).unwrap();
    assert_eq!(tables.keyboard.len(), 2);
    assert_eq!(tables.keyboard.neighbors('q'), Some(&['w', 'a', 's'][..]));
    assert_eq!(tables.natural.len(), 2);
    assert_eq!(tables.natural.variants("which").map(<[String]>::len), Some(2));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(KEYBOARD_FILE), "q w\n").unwrap();

    let err = LookupTables::from_dir(dir.path()).unwrap_err();
    match err {
        LoadError::Io { path, .. } => assert!(path.ends_with(NATURAL_FILE)),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_keyboard_line_aborts_load() {
    let dir = TempDir::new().unwrap();
    write_tables(&dir, "q w a s\nqq w\n", "their thier\n");

    let err = LookupTables::from_dir(dir.path()).unwrap_err();
    match &err {
        LoadError::Malformed { path, line, .. } => {
            assert!(path.ends_with(KEYBOARD_FILE));
            assert_eq!(*line, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains(":2:"));
}

#[test]
fn test_blank_line_aborts_load() {
    let dir = TempDir::new().unwrap();
    write_tables(&dir, "q w\n", "their thier\n\nwhich wich\n");

    let err = LookupTables::from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, LoadError::Malformed { line: 2, .. }));
}

#[test]
fn test_perturber_from_dir_fails_on_bad_tables() {
    let dir = TempDir::new().unwrap();
    write_tables(&dir, "\n", "their thier\n");

    let err = Perturber::from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, PerturbError::ResourceLoad(_)));
}

#[test]
fn test_perturber_uses_loaded_tables() {
    let dir = TempDir::new().unwrap();
    write_tables(&dir, "a s\n", "cat kat\n");

    let perturber = Perturber::from_dir(dir.path()).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        perturber.perturb("cat", "natural-typo", 1.0, &mut rng).unwrap(),
        "kat"
    );
    assert_eq!(perturber.perturb("a", "keyboard-typo", 1.0, &mut rng).unwrap(), "s");
    assert_eq!(perturber.perturb("A", "keyboard-typo", 1.0, &mut rng).unwrap(), "S");
}

#[test]
fn test_utf8_entries() {
    let dir = TempDir::new().unwrap();
    write_tables(&dir, "é è ê\n", "café cafe caffé\n");

    let tables = LookupTables::from_dir(dir.path()).unwrap();
    assert_eq!(tables.keyboard.neighbors('É'), Some(&['è', 'ê'][..]));
    assert_eq!(tables.natural.variants("café").map(<[String]>::len), Some(2));
}
