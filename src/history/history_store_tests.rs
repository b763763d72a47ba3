//! Tests for history/history_store

use super::*;
use proptest::prelude::*;

fn store_with(entries: &[&str]) -> HistoryStore {
    let mut store = HistoryStore::new();
    // Appended oldest first so the last item ends up at the head
    for entry in entries {
        store.append(entry);
    }
    store
}

fn texts(entries: &[AdviceEntry]) -> Vec<&str> {
    entries.iter().map(AdviceEntry::as_str).collect()
}

#[test]
fn test_new_store_is_empty() {
    let store = HistoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn test_append_prepends_entry() {
    let mut store = HistoryStore::new();
    store.append("first");
    store.append("second");

    let all: Vec<&str> = store.entries().map(AdviceEntry::as_str).collect();
    assert_eq!(all, vec!["second", "first"]);
}

#[test]
fn test_append_empty_is_ignored() {
    let mut store = store_with(&["keep"]);
    store.append("");

    assert_eq!(store.len(), 1);
    assert_eq!(texts(&store.get_last_n(Some(5.0))), vec!["keep"]);
}

#[test]
fn test_append_keeps_duplicates() {
    let store = store_with(&["same", "same"]);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_get_last_n_absent_returns_empty() {
    let store = store_with(&["a", "b"]);
    assert!(store.get_last_n(None).is_empty());
}

#[test]
fn test_get_last_n_non_finite_returns_empty() {
    let store = store_with(&["a", "b"]);
    assert!(store.get_last_n(Some(f64::NAN)).is_empty());
    assert!(store.get_last_n(Some(f64::INFINITY)).is_empty());
    assert!(store.get_last_n(Some(f64::NEG_INFINITY)).is_empty());
}

#[test]
fn test_get_last_n_zero_and_negative_return_empty() {
    let store = store_with(&["a", "b"]);
    assert!(store.get_last_n(Some(0.0)).is_empty());
    assert!(store.get_last_n(Some(-3.0)).is_empty());
}

#[test]
fn test_get_last_n_returns_newest_first() {
    let store = store_with(&["oldest", "middle", "newest"]);
    assert_eq!(
        texts(&store.get_last_n(Some(2.0))),
        vec!["newest", "middle"]
    );
}

#[test]
fn test_get_last_n_larger_than_log_returns_all() {
    let store = store_with(&["a", "b"]);
    assert_eq!(texts(&store.get_last_n(Some(5.0))), vec!["b", "a"]);
}

#[test]
fn test_get_last_n_truncates_fraction() {
    let store = store_with(&["a", "b", "c"]);
    assert_eq!(texts(&store.get_last_n(Some(2.9))), vec!["c", "b"]);
    assert!(store.get_last_n(Some(0.5)).is_empty());
}

#[test]
fn test_advice_entry_rejects_empty() {
    assert!(AdviceEntry::new("").is_none());
    assert_eq!(
        AdviceEntry::new("Be kind.").map(|e| e.to_string()),
        Some("Be kind.".to_string())
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_get_last_n_returns_min_of_n_and_len(
        entries in prop::collection::vec("[a-zA-Z .]{1,20}", 0..30),
        n in 1usize..50,
    ) {
        let mut store = HistoryStore::new();
        for entry in &entries {
            store.append(entry);
        }

        let result = store.get_last_n(Some(n as f64));
        prop_assert_eq!(result.len(), n.min(entries.len()));

        // Newest first: result mirrors the reversed insertion order
        let expected: Vec<&str> = entries.iter().rev().take(n).map(String::as_str).collect();
        prop_assert_eq!(texts(&result), expected);
    }

    #[test]
    fn prop_get_last_n_never_mutates(
        entries in prop::collection::vec("[a-z]{1,10}", 0..20),
        n in -10.0f64..40.0,
    ) {
        let mut store = HistoryStore::new();
        for entry in &entries {
            store.append(entry);
        }
        let before: Vec<AdviceEntry> = store.entries().cloned().collect();

        let _ = store.get_last_n(Some(n));

        let after: Vec<AdviceEntry> = store.entries().cloned().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_non_positive_counts_return_empty(
        entries in prop::collection::vec("[a-z]{1,10}", 0..20),
        n in -1000.0f64..=0.0,
    ) {
        let mut store = HistoryStore::new();
        for entry in &entries {
            store.append(entry);
        }
        prop_assert!(store.get_last_n(Some(n)).is_empty());
    }

    #[test]
    fn prop_append_sets_new_head(
        entries in prop::collection::vec("[a-z]{1,10}", 0..20),
        text in "[a-zA-Z ]{1,30}",
    ) {
        let mut store = HistoryStore::new();
        for entry in &entries {
            store.append(entry);
        }

        store.append(&text);

        prop_assert_eq!(store.len(), entries.len() + 1);
        prop_assert_eq!(store.entries().next().map(AdviceEntry::as_str), Some(text.as_str()));
    }
}
