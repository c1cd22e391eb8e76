use std::fs;
use tempfile::tempdir;

use file_manager::{create_file, delete_file, read_file, rename_file, FileManagerError, GREETING};

#[test]
fn create_then_exists_with_greeting() {
    let td = tempdir().unwrap();
    for name in ["a.txt", "with space.txt", "no_extension"] {
        let p = td.path().join(name);
        create_file(&p).expect("create_file");
        assert!(p.is_file(), "{name} should exist");
        assert_eq!(fs::read_to_string(&p).unwrap(), GREETING);
    }
}

#[test]
fn create_on_existing_reports_already_exists_and_keeps_content() {
    let td = tempdir().unwrap();
    let p = td.path().join("taken.txt");
    fs::write(&p, b"do not touch").unwrap();

    let err = create_file(&p).unwrap_err();
    assert!(matches!(err, FileManagerError::AlreadyExists(_)), "got {err:?}");
    assert_eq!(err.code(), "already_exists");
    assert_eq!(fs::read(&p).unwrap(), b"do not touch");
}

#[test]
fn read_reproduces_written_bytes() {
    let td = tempdir().unwrap();
    let samples: [&[u8]; 4] = [b"", b"single line\n", b"no trailing newline", &[0, 159, 146, 150, 255, 10, 13]];
    for (i, bytes) in samples.iter().enumerate() {
        let p = td.path().join(format!("sample{i}"));
        fs::write(&p, bytes).unwrap();
        let mut out = Vec::new();
        let n = read_file(&p, &mut out).expect("read_file");
        assert_eq!(n as usize, bytes.len());
        assert_eq!(&out, bytes);
    }
}

#[test]
fn read_directory_is_an_error() {
    let td = tempdir().unwrap();
    let mut out = Vec::new();
    assert!(read_file(td.path(), &mut out).is_err());
}

#[test]
fn rename_missing_source_reports_not_found_without_change() {
    let td = tempdir().unwrap();
    let existing = td.path().join("other.txt");
    fs::write(&existing, b"x").unwrap();
    let before: Vec<_> = fs::read_dir(td.path()).unwrap().map(|e| e.unwrap().file_name()).collect();

    let err = rename_file(&td.path().join("ghost.txt"), &td.path().join("new.txt")).unwrap_err();
    assert!(matches!(err, FileManagerError::NotFound { .. }), "got {err:?}");
    assert!(err.to_string().contains("ghost.txt"));

    let after: Vec<_> = fs::read_dir(td.path()).unwrap().map(|e| e.unwrap().file_name()).collect();
    assert_eq!(before, after);
}

#[test]
fn delete_then_read_is_not_found() {
    let td = tempdir().unwrap();
    let p = td.path().join("short_lived");
    create_file(&p).unwrap();
    delete_file(&p).unwrap();
    let mut out = Vec::new();
    let err = read_file(&p, &mut out).unwrap_err();
    assert!(matches!(err, FileManagerError::NotFound { .. }));
}
