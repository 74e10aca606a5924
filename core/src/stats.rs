// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::iter::Sum;
use std::ops::AddAssign;

/// Word frequency table
///
/// Only words that were actually observed are stored: a word that never
/// occurred is absent rather than mapped to zero. The same type is used for the
/// tally of a single page and for the merged result of a whole scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stats {
    word_frequencies: BTreeMap<String, u64>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `word`
    pub fn record(&mut self, word: &str) {
        self.add(word, 1);
    }

    /// Add `count` occurrences of `word`; a zero count leaves the table untouched
    pub fn add(&mut self, word: &str, count: u64) {
        if count == 0 {
            return;
        }
        match self.word_frequencies.get_mut(word) {
            Some(current) => *current += count,
            None => {
                self.word_frequencies.insert(word.to_string(), count);
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.word_frequencies.get(word).copied()
    }

    /// Number of distinct words observed
    pub fn len(&self) -> usize {
        self.word_frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_frequencies.is_empty()
    }

    /// Sum of all occurrence counts
    pub fn total(&self) -> u64 {
        self.word_frequencies.values().sum()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, u64> {
        self.word_frequencies.iter()
    }

    pub fn into_inner(self) -> BTreeMap<String, u64> {
        self.word_frequencies
    }

    /// Fold any number of tallies into one by pointwise addition.
    /// Order of the input does not matter; no input gives an empty table.
    pub fn merge<I>(tallies: I) -> Stats
    where
        I: IntoIterator<Item = Stats>,
    {
        tallies.into_iter().fold(Stats::new(), |mut acc, tally| {
            acc += tally;
            acc
        })
    }
}

impl AddAssign<Stats> for Stats {
    fn add_assign(&mut self, mut other: Stats) {
        if self.word_frequencies.is_empty() {
            other.word_frequencies.retain(|_, count| *count > 0);
            self.word_frequencies = other.word_frequencies;
            return;
        }
        for (word, count) in other.word_frequencies {
            if count > 0 {
                *self.word_frequencies.entry(word).or_insert(0) += count;
            }
        }
    }
}

impl AddAssign<&Stats> for Stats {
    fn add_assign(&mut self, other: &Stats) {
        for (word, count) in &other.word_frequencies {
            self.add(word, *count);
        }
    }
}

impl Sum for Stats {
    fn sum<I: Iterator<Item = Stats>>(iter: I) -> Self {
        Stats::merge(iter)
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for Stats {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut stats = Stats::new();
        for (word, count) in iter {
            let word: String = word.into();
            stats.add(&word, count);
        }
        stats
    }
}

impl<'a> IntoIterator for &'a Stats {
    type Item = (&'a String, &'a u64);
    type IntoIter = btree_map::Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
