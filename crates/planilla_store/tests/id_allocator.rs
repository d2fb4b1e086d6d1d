//! ID allocation across calls, instances, and threads.

use planilla_store::{IdAllocator, RecordId, StoreConfig, StoreError};
use std::collections::HashSet;
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::tempdir;

fn config() -> StoreConfig {
    StoreConfig::new().sync_on_write(false)
}

#[test]
fn sequential_ids_have_no_gaps() {
    let dir = tempdir().unwrap();
    let ids = IdAllocator::with_config(dir.path().join("idControl.txt"), config());

    let issued: Vec<i64> = (0..25).map(|_| ids.next_id("x").unwrap().get()).collect();
    assert_eq!(issued, (1..=25).collect::<Vec<_>>());
}

#[test]
fn names_do_not_interfere() {
    let dir = tempdir().unwrap();
    let ids = IdAllocator::with_config(dir.path().join("idControl.txt"), config());

    assert_eq!(ids.next_id("a").unwrap(), RecordId::new(1));
    assert_eq!(ids.next_id("b").unwrap(), RecordId::new(1));
    assert_eq!(ids.next_id("a").unwrap(), RecordId::new(2));
    assert_eq!(ids.next_id("a").unwrap(), RecordId::new(3));
    assert_eq!(ids.next_id("b").unwrap(), RecordId::new(2));
}

#[test]
fn fresh_allocator_continues_sequence() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("idControl.txt");

    {
        let ids = IdAllocator::with_config(&path, config());
        for _ in 0..7 {
            ids.next_id("x").unwrap();
        }
    }

    let ids = IdAllocator::with_config(&path, config());
    assert_eq!(ids.next_id("x").unwrap(), RecordId::new(8));
    assert_eq!(ids.last_issued("x").unwrap(), RecordId::new(8));
}

#[test]
fn ledger_lines_are_name_equals_value() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("idControl.txt");
    let ids = IdAllocator::with_config(&path, config());

    ids.next_id("usuarios.txt").unwrap();
    ids.next_id("empleados.txt").unwrap();
    ids.next_id("empleados.txt").unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["empleados.txt=2", "usuarios.txt=1"]);
}

#[test]
fn malformed_ledger_lines_are_dropped_on_rewrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("idControl.txt");
    fs::write(&path, "garbage\nx=3\n").unwrap();

    let ids = IdAllocator::with_config(&path, config());
    assert_eq!(ids.next_id("x").unwrap(), RecordId::new(4));
    assert_eq!(fs::read_to_string(&path).unwrap().lines().collect::<Vec<_>>(), vec!["x=4"]);
}

#[test]
fn corrupt_counter_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("idControl.txt");
    fs::write(&path, "x=seven\n").unwrap();

    let ids = IdAllocator::with_config(&path, config());
    assert!(matches!(ids.next_id("x"), Err(StoreError::InvalidLedgerEntry { .. })));
    assert_eq!(fs::read_to_string(&path).unwrap(), "x=seven\n");
}

#[test]
fn names_that_break_the_ledger_are_refused() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("idControl.txt");
    let ids = IdAllocator::with_config(&path, config());

    for name in ["emp=v2.txt", "emp=v2.txt", "a\nb=9"] {
        assert!(matches!(
            ids.next_id(name),
            Err(StoreError::InvalidLedgerName { .. })
        ));
    }
    assert!(!path.exists());

    ids.next_id("emp.txt").unwrap();
    assert!(ids.next_id("emp.txt\r").is_err());
    assert_eq!(ids.next_id("emp.txt").unwrap(), RecordId::new(2));
    assert_eq!(fs::read_to_string(&path).unwrap().lines().collect::<Vec<_>>(), vec!["emp.txt=2"]);
}

#[test]
fn ledger_in_missing_directory_is_io_error() {
    let dir = tempdir().unwrap();
    let ids = IdAllocator::with_config(dir.path().join("nope").join("idControl.txt"), config());
    assert!(matches!(ids.next_id("x"), Err(StoreError::Io(_))));
}

#[test]
fn concurrent_callers_get_unique_ids() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("idControl.txt");
    let shared = Arc::new(IdAllocator::with_config(&path, config()));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            // Half the threads share one allocator, the rest open their own.
            let ids = if t % 2 == 0 {
                Arc::clone(&shared)
            } else {
                Arc::new(IdAllocator::with_config(&path, config()))
            };
            thread::spawn(move || {
                (0..20)
                    .map(|_| ids.next_id("emp").unwrap().get())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(seen.insert(id), "duplicate id {id}");
        }
    }
    assert_eq!(seen.len(), 160);
    assert_eq!(seen.iter().copied().max(), Some(160));
}

#[test]
fn advisory_lock_allocation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("idControl.txt");
    let ids = IdAllocator::with_config(&path, config().advisory_lock(true));

    let issued: Vec<i64> = (0..5).map(|_| ids.next_id("x").unwrap().get()).collect();
    assert_eq!(issued, vec![1, 2, 3, 4, 5]);
}
