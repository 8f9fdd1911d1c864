//! Table Tests
//!
//! Tests verify:
//! - Basic CRUD operations
//! - Update-in-place semantics
//! - Growth across the fill threshold
//! - Edge cases (empty keys, empty values, large values)
//! - Concurrent access patterns

use chainkv::table::Table;

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_table_is_empty() {
    let table = Table::with_capacity(128).unwrap();
    assert_eq!(table.len(), 0);
    assert_eq!(table.capacity(), 128);
    assert!(table.is_empty());
}

#[test]
fn test_insert_and_get() {
    let table = Table::with_capacity(128).unwrap();

    table.insert("key1", b"value1");

    assert_eq!(table.get("key1"), Some(b"value1".to_vec()));
}

#[test]
fn test_get_nonexistent_key() {
    let table = Table::with_capacity(128).unwrap();

    assert_eq!(table.get("nonexistent"), None);
}

#[test]
fn test_insert_multiple_entries() {
    let table = Table::with_capacity(128).unwrap();

    table.insert("key1", b"value1");
    table.insert("key2", b"value2");
    table.insert("key3", b"value3");

    assert_eq!(table.len(), 3);
    assert_eq!(table.get("key1"), Some(b"value1".to_vec()));
    assert_eq!(table.get("key2"), Some(b"value2".to_vec()));
    assert_eq!(table.get("key3"), Some(b"value3".to_vec()));
}

#[test]
fn test_insert_overwrites_existing() {
    let table = Table::with_capacity(128).unwrap();

    table.insert("key1", b"value1");
    table.insert("key1", b"value2");

    assert_eq!(table.len(), 1);
    assert_eq!(table.get("key1"), Some(b"value2".to_vec()));
}

#[test]
fn test_get_returns_independent_copy() {
    let table = Table::with_capacity(128).unwrap();

    table.insert("key", b"before");
    let copy = table.get("key").unwrap();

    table.insert("key", b"after");

    assert_eq!(copy, b"before");
    assert_eq!(table.get("key"), Some(b"after".to_vec()));
}

// =============================================================================
// Remove Tests
// =============================================================================

#[test]
fn test_remove_existing_key() {
    let table = Table::with_capacity(128).unwrap();

    table.insert("key1", b"value1");

    assert!(table.remove("key1"));
    assert_eq!(table.get("key1"), None);
    assert_eq!(table.len(), 0);
}

#[test]
fn test_remove_nonexistent_key() {
    let table = Table::with_capacity(128).unwrap();

    table.insert("key1", b"value1");

    assert!(!table.remove("other"));
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("key1"), Some(b"value1".to_vec()));
}

#[test]
fn test_remove_from_shared_bucket() {
    // "am", "ei", and "ma" all hash to the same slot modulo 128, so they
    // share one chain; removing the middle entry must splice around it.
    let table = Table::with_capacity(128).unwrap();

    table.insert("am", b"1");
    table.insert("ei", b"2");
    table.insert("ma", b"3");

    assert!(table.remove("ei"));

    assert_eq!(table.get("am"), Some(b"1".to_vec()));
    assert_eq!(table.get("ei"), None);
    assert_eq!(table.get("ma"), Some(b"3".to_vec()));
    assert_eq!(table.len(), 2);
}

#[test]
fn test_insert_after_remove() {
    let table = Table::with_capacity(128).unwrap();

    table.insert("key1", b"value1");
    assert!(table.remove("key1"));
    table.insert("key1", b"value2");

    assert_eq!(table.get("key1"), Some(b"value2".to_vec()));
    assert_eq!(table.len(), 1);
}

// =============================================================================
// Growth Tests
// =============================================================================

#[test]
fn test_capacity_doubles_past_threshold() {
    let table = Table::with_capacity(4).unwrap();

    // 4 entries fill the table exactly to the 0.75 boundary without
    // crossing it, so capacity holds.
    for i in 0..4 {
        table.insert(&format!("key{}", i), b"value");
    }
    assert_eq!(table.capacity(), 4);

    // The next insert sees the ratio above the threshold and doubles first.
    table.insert("key4", b"value");
    assert_eq!(table.capacity(), 8);
    assert_eq!(table.len(), 5);
}

#[test]
fn test_growth_preserves_entries() {
    let table = Table::with_capacity(16).unwrap();

    for i in 0..1000 {
        table.insert(&format!("key{:04}", i), format!("value{}", i).as_bytes());
    }

    assert_eq!(table.len(), 1000);
    assert!(table.capacity() > 16);
    for i in 0..1000 {
        assert_eq!(
            table.get(&format!("key{:04}", i)),
            Some(format!("value{}", i).into_bytes()),
            "key{:04} lost across growth",
            i
        );
    }
}

#[test]
fn test_growth_keeps_update_semantics() {
    let table = Table::with_capacity(4).unwrap();

    table.insert("stable", b"first");
    for i in 0..100 {
        table.insert(&format!("filler{}", i), b"x");
    }
    table.insert("stable", b"second");

    assert_eq!(table.get("stable"), Some(b"second".to_vec()));
    assert_eq!(table.len(), 101);
}

// =============================================================================
// Edge Cases
// =============================================================================

#[test]
fn test_empty_key() {
    let table = Table::with_capacity(128).unwrap();

    table.insert("", b"value");

    assert_eq!(table.get(""), Some(b"value".to_vec()));
    assert!(table.remove(""));
    assert_eq!(table.get(""), None);
}

#[test]
fn test_empty_value() {
    let table = Table::with_capacity(128).unwrap();

    table.insert("key", b"");

    // A zero-length value is present, distinct from not-found.
    assert_eq!(table.get("key"), Some(Vec::new()));
    assert_eq!(table.get("missing"), None);
}

#[test]
fn test_large_value() {
    let table = Table::with_capacity(128).unwrap();

    let large_value = vec![0xAB; 1024 * 1024]; // 1 MB
    table.insert("big_key", &large_value);

    assert_eq!(table.get("big_key"), Some(large_value));
}

#[test]
fn test_keys_lists_every_entry() {
    let table = Table::with_capacity(8).unwrap();

    table.insert("apple", b"1");
    table.insert("banana", b"2");
    table.insert("cherry", b"3");

    let mut keys = table.keys();
    keys.sort();
    assert_eq!(keys, vec!["apple", "banana", "cherry"]);
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_concurrent_disjoint_inserts() {
    use std::sync::Arc;
    use std::thread;

    let table = Arc::new(Table::with_capacity(128).unwrap());

    let mut handles = vec![];

    for i in 0..8 {
        let t = Arc::clone(&table);
        let handle = thread::spawn(move || {
            for j in 0..100 {
                let key = format!("key{}_{}", i, j);
                let value = format!("value{}_{}", i, j);
                t.insert(&key, value.as_bytes());
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(table.len(), 800);
    for i in 0..8 {
        for j in 0..100 {
            let key = format!("key{}_{}", i, j);
            let value = format!("value{}_{}", i, j);
            assert_eq!(table.get(&key), Some(value.into_bytes()));
        }
    }
}

#[test]
fn test_concurrent_inserts_force_growth() {
    use std::sync::Arc;
    use std::thread;

    // Tiny initial capacity so many resizes happen while writers race.
    let table = Arc::new(Table::with_capacity(2).unwrap());

    let mut handles = vec![];

    for i in 0..8 {
        let t = Arc::clone(&table);
        handles.push(thread::spawn(move || {
            for j in 0..50 {
                t.insert(&format!("key{}_{}", i, j), b"value");
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(table.len(), 400);
    assert!(table.capacity() > 2);
    for i in 0..8 {
        for j in 0..50 {
            assert_eq!(table.get(&format!("key{}_{}", i, j)), Some(b"value".to_vec()));
        }
    }
}

#[test]
fn test_readers_never_observe_torn_values() {
    let table = Table::with_capacity(16).unwrap();
    table.insert("key", b"aaaaaaaa");

    crossbeam::thread::scope(|s| {
        s.spawn(|_| {
            for _ in 0..1000 {
                table.insert("key", b"aaaaaaaa");
                table.insert("key", b"bbbbbbbb");
            }
        });

        for _ in 0..4 {
            s.spawn(|_| {
                for _ in 0..1000 {
                    let value = table.get("key").unwrap();
                    assert!(
                        value == b"aaaaaaaa" || value == b"bbbbbbbb",
                        "torn read: {:?}",
                        value
                    );
                }
            });
        }
    })
    .unwrap();
}

#[test]
fn test_concurrent_mixed_operations() {
    use std::sync::Arc;
    use std::thread;

    let table = Arc::new(Table::with_capacity(8).unwrap());

    let mut handles = vec![];

    for i in 0..4 {
        let t = Arc::clone(&table);
        handles.push(thread::spawn(move || {
            for j in 0..100 {
                let key = format!("key{}_{}", i, j);
                t.insert(&key, b"value");
                assert_eq!(t.get(&key), Some(b"value".to_vec()));
                assert!(t.remove(&key));
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    // Every thread removed what it inserted.
    assert_eq!(table.len(), 0);
}
