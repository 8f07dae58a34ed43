//! End-to-end tests for drift resolution against files on disk.
//!
//! Each test writes a source file, anchors into it, edits the file, and
//! checks where `update()` moves the anchor.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use serde_json::json;
use spor::{update, update_store, AlignmentError, Anchor, AnchorStore, Error, MemoryStore};
use tempfile::TempDir;

fn write_source(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

// ============================================================================
// 1. Insertion inside the topic shifts nothing before it
// ============================================================================

#[test]
fn test_update_after_insertion() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "source.py", "aabbcc");
    let anchor = Anchor::open(&path, 2, 2, 2, json!({"id": 1})).unwrap();

    fs::write(&path, "aabBbcc").unwrap();
    let updated = update(&anchor).unwrap();

    assert_eq!(updated.offset(), 2);
    assert_eq!(updated.context().topic.text, "bB");
    assert_eq!(updated.metadata(), &json!({"id": 1}));
    assert_eq!(updated.file_path(), path.as_path());
}

// ============================================================================
// 2. Insertion before the topic shifts it right
// ============================================================================

#[test]
fn test_update_follows_shifted_topic() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "lib.rs", "fn one() {}\nfn two() {}\nfn three() {}\n");
    let anchor = Anchor::open(&path, 12, 11, 6, json!("two")).unwrap();
    assert_eq!(anchor.context().topic.text, "fn two() {}");

    fs::write(&path, "// prelude\nfn one() {}\nfn two() {}\nfn three() {}\n").unwrap();
    let updated = update(&anchor).unwrap();

    assert_eq!(updated.offset(), 23);
    assert_eq!(updated.context().topic.text, "fn two() {}");
}

// ============================================================================
// 3. Re-running on an unchanged file is a no-op
// ============================================================================

#[test]
fn test_update_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "source.py", "aabbcc");
    let anchor = Anchor::open(&path, 2, 2, 2, json!({})).unwrap();

    fs::write(&path, "aaBbbcc").unwrap();
    let first = update(&anchor).unwrap();
    let second = update(&first).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.offset(), 3);
}

// ============================================================================
// 4. Failures
// ============================================================================

#[test]
fn test_update_with_nothing_in_common() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "source.py", "aabbcc");
    let anchor = Anchor::open(&path, 2, 2, 2, json!({})).unwrap();

    fs::write(&path, "xxxxxxx").unwrap();
    let err = update(&anchor).unwrap_err();
    assert!(matches!(err, Error::Alignment(AlignmentError::NoAlignments)));
}

#[test]
fn test_update_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "source.py", "aabbcc");
    let anchor = Anchor::open(&path, 2, 2, 2, json!({})).unwrap();

    fs::remove_file(&path).unwrap();
    let err = update(&anchor).unwrap_err();
    assert!(matches!(err, Error::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
}

#[test]
fn test_open_relative_path() {
    let err = Anchor::open("relative/source.py", 0, 1, 1, json!({})).unwrap_err();
    assert!(matches!(err, Error::Path(_)));
}

// ============================================================================
// 5. Batch update keeps going past failures
// ============================================================================

#[test]
fn test_update_store_isolates_failures() {
    let dir = TempDir::new().unwrap();
    let good = write_source(&dir, "good.py", "aabbcc");
    let bad = write_source(&dir, "bad.py", "aabbcc");

    let store = MemoryStore::new();
    let good_id = store.add(Anchor::open(&good, 2, 2, 2, json!("good")).unwrap()).unwrap();
    let bad_id = store.add(Anchor::open(&bad, 2, 2, 2, json!("bad")).unwrap()).unwrap();

    fs::write(&good, "zzaabbcc").unwrap();
    fs::write(&bad, "xxxxxxx").unwrap();

    let report = update_store(&store).unwrap();
    assert_eq!(report.updated, vec![good_id]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, bad_id);
    assert!(report.failed[0].1.is_alignment());
    assert!(!report.is_clean());

    assert_eq!(store.get(good_id).unwrap().unwrap().offset(), 4);
    assert_eq!(store.get(bad_id).unwrap().unwrap().offset(), 2);
}
