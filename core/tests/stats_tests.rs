// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use keyword_stats_core::Stats;
use rand::seq::SliceRandom;
use rand::Rng;

fn stats(entries: &[(&str, u64)]) -> Stats {
    entries.iter().map(|(word, count)| (*word, *count)).collect()
}

#[test]
fn test_merge_of_nothing_is_empty() {
    let merged = Stats::merge(Vec::new());
    assert!(merged.is_empty());
    assert_eq!(merged.total(), 0);
}

#[test]
fn test_merge_adds_pointwise() {
    let merged = Stats::merge(vec![
        stats(&[("a", 2), ("b", 1)]),
        stats(&[("b", 2)]),
        stats(&[("c", 5)]),
    ]);
    assert_eq!(merged, stats(&[("a", 2), ("b", 3), ("c", 5)]));
    assert_eq!(merged.total(), 10);
}

#[test]
fn test_unseen_words_are_absent() {
    let mut tally = Stats::new();
    tally.record("yangle");
    tally.add("rocks", 0);

    assert_eq!(tally.get("yangle"), Some(1));
    assert_eq!(tally.get("rocks"), None);
    assert_eq!(tally.len(), 1);
}

#[test]
fn test_add_assign_by_value_and_reference() {
    let mut total = stats(&[("a", 1)]);
    total += &stats(&[("a", 1), ("b", 1)]);
    total += stats(&[("b", 4)]);
    assert_eq!(total, stats(&[("a", 2), ("b", 5)]));
}

#[test]
fn test_sum_matches_merge() {
    let parts = vec![stats(&[("x", 1)]), stats(&[("x", 2), ("y", 1)])];
    let summed: Stats = parts.clone().into_iter().sum();
    assert_eq!(summed, Stats::merge(parts));
}

#[test]
fn test_merge_ignores_order() {
    let mut rng = rand::rng();
    let words = ["a", "b", "c", "d", "e"];

    for _ in 0..50 {
        let mut tallies = Vec::new();
        for _ in 0..rng.random_range(0..8) {
            let mut tally = Stats::new();
            for word in words {
                if rng.random_bool(0.5) {
                    tally.add(word, rng.random_range(1..10));
                }
            }
            tallies.push(tally);
        }

        let expected = Stats::merge(tallies.clone());
        tallies.shuffle(&mut rng);
        assert_eq!(Stats::merge(tallies.clone()), expected);
        tallies.reverse();
        assert_eq!(Stats::merge(tallies), expected);
    }
}

#[test]
fn test_serializes_as_plain_object() {
    let tally = stats(&[("rocks", 2), ("yangle", 6)]);
    let json = serde_json::to_string(&tally).unwrap();
    assert_eq!(json, r#"{"rocks":2,"yangle":6}"#);
}

#[test]
fn test_into_inner_keeps_observed_words_only() {
    let mut tally = stats(&[("rocks", 2)]);
    tally.add("sucks", 0);
    tally += stats(&[("yangle", 1)]);

    let map = tally.into_inner();
    let words: Vec<_> = map.keys().map(String::as_str).collect();
    assert_eq!(words, vec!["rocks", "yangle"]);
    assert_eq!(map["rocks"], 2);
}
