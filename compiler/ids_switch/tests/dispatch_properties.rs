//! Property tests for dispatch correctness.
//!
//! Keys are drawn from a tiny alphabet so that random tables are dense with
//! shared lengths, shared prefixes, and one-character neighbours, which is
//! where partial checks could produce false positives.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::collections::BTreeSet;

use ids_emit::CodeBuffer;
use ids_switch::{DispatchTree, Entry, SwitchConfig, SwitchGenerator, SyntaxProfile};
use proptest::prelude::*;

fn key_set() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[abc]{0,6}", 1..24)
}

fn entries_for(keys: &BTreeSet<String>) -> Vec<Entry> {
    keys.iter()
        .enumerate()
        .map(|(i, key)| Entry::new(key.clone(), format!("Id_{i}")))
        .collect()
}

fn plan(entries: &[Entry], config: SwitchConfig) -> DispatchTree {
    SwitchGenerator::new(SyntaxProfile::csharp())
        .with_config(config)
        .plan(entries, "Id_0")
        .expect("distinct keys")
}

/// Strings near `key`: every one-unit substitution, plus truncation and
/// extension.
fn neighbours(key: &str) -> Vec<String> {
    let chars: Vec<char> = key.chars().collect();
    let mut out = Vec::new();
    for i in 0..chars.len() {
        for c in ['a', 'b', 'c', 'z'] {
            if chars[i] != c {
                let mut changed = chars.clone();
                changed[i] = c;
                out.push(changed.into_iter().collect());
            }
        }
    }
    if !chars.is_empty() {
        out.push(chars[..chars.len() - 1].iter().collect());
    }
    out.push(format!("{key}a"));
    out.push(format!("{key}z"));
    out
}

proptest! {
    #[test]
    fn every_key_dispatches_to_its_destination(keys in key_set()) {
        let entries = entries_for(&keys);
        let tree = plan(&entries, SwitchConfig::default());
        for entry in &entries {
            prop_assert_eq!(tree.dispatch(&entry.key), entry.destination.as_str());
        }
    }

    #[test]
    fn non_members_dispatch_to_default(keys in key_set()) {
        let entries = entries_for(&keys);
        let tree = plan(&entries, SwitchConfig::default());
        for key in &keys {
            for probe in neighbours(key) {
                if !keys.contains(&probe) {
                    prop_assert_eq!(tree.dispatch(&probe), "Id_0", "probe {:?}", probe);
                }
            }
        }
        if !keys.contains("") {
            prop_assert_eq!(tree.dispatch(""), "Id_0");
        }
    }

    #[test]
    fn thresholds_do_not_change_meaning(
        keys in key_set(),
        use_if_threshold in 0usize..6,
        char_tail_test_threshold in 0usize..6,
    ) {
        let entries = entries_for(&keys);
        let config = SwitchConfig {
            use_if_threshold,
            char_tail_test_threshold,
            ..SwitchConfig::default()
        };
        let tree = plan(&entries, config);
        for entry in &entries {
            prop_assert_eq!(tree.dispatch(&entry.key), entry.destination.as_str());
            for probe in neighbours(&entry.key) {
                if !keys.contains(&probe) {
                    prop_assert_eq!(tree.dispatch(&probe), "Id_0");
                }
            }
        }
    }

    #[test]
    fn generation_is_deterministic(keys in key_set()) {
        let entries = entries_for(&keys);
        let mut shuffled = entries.clone();
        shuffled.rotate_left(entries.len() / 2);
        let generator = SwitchGenerator::new(SyntaxProfile::csharp());

        let mut a = CodeBuffer::new();
        let mut b = CodeBuffer::new();
        let mut c = CodeBuffer::new();
        generator.generate(&entries, "0", &mut a).unwrap();
        generator.generate(&entries, "0", &mut b).unwrap();
        generator.generate(&shuffled, "0", &mut c).unwrap();
        prop_assert_eq!(a.as_str(), b.as_str());
        prop_assert_eq!(a.as_str(), c.as_str());
    }

    #[test]
    fn any_duplicate_is_rejected(keys in key_set(), pick in any::<prop::sample::Index>()) {
        let mut entries = entries_for(&keys);
        let duplicate = entries[pick.index(entries.len())].clone();
        entries.push(Entry::new(duplicate.key, "Id_dup"));
        let mut out = CodeBuffer::new();
        let result = SwitchGenerator::new(SyntaxProfile::java()).generate(&entries, "0", &mut out);
        prop_assert!(result.is_err());
        prop_assert!(out.is_empty());
    }
}

#[test]
fn long_keys_recurse_without_overflow() {
    let base = "x".repeat(5000);
    let entries: Vec<Entry> = ['a', 'b', 'c']
        .iter()
        .enumerate()
        .map(|(i, c)| Entry::new(format!("{base}{c}{base}"), format!("Id_{i}")))
        .collect();
    let tree = plan(&entries, SwitchConfig::default());
    for entry in &entries {
        assert_eq!(tree.dispatch(&entry.key), entry.destination);
    }
    assert_eq!(tree.dispatch(&format!("{base}d{base}")), "Id_0");
}
