// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::hash_set::{self, HashSet};
use tracing::warn;

/// The fixed set of words a scan counts
///
/// Words are matched exactly against space-delimited tokens. A word that is
/// empty or contains a space is kept but can never match, so it never shows up
/// in a tally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyWords {
    words: HashSet<String>,
}

impl KeyWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: HashSet<String> = words.into_iter().map(Into::into).collect();
        for word in &words {
            if !can_match(word) {
                warn!(word = %word, "key word can never match a space-delimited token");
            }
        }
        Self { words }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.words.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for KeyWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        KeyWords::new(iter)
    }
}

fn can_match(word: &str) -> bool {
    !word.is_empty() && !word.contains(' ')
}
