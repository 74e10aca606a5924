// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rand::Rng;

pub fn generate_random_word(rng: &mut impl Rng, max_length: usize) -> String {
    let length = rng.random_range(1..=max_length.max(1));
    generate_target_word(rng, length)
}

pub fn generate_target_word(rng: &mut impl Rng, length: usize) -> String {
    (0..length)
        .map(|_| {
            let c = rng.random_range(b'a'..=b'z');
            c as char
        })
        .collect()
}

/// A line of up to `max_words` random words joined by single spaces
pub fn generate_random_line(rng: &mut impl Rng, max_words: usize, max_word_length: usize) -> String {
    let num_words = rng.random_range(0..=max_words);
    (0..num_words)
        .map(|_| generate_random_word(rng, max_word_length))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Random input lines and distinct target words for a benchmark run
pub fn generate_test_data(
    num_lines: usize,
    max_words_per_line: usize,
    num_target_words: usize,
    target_word_length: usize,
) -> (Vec<String>, Vec<String>) {
    let mut rng = rand::rng();

    let lines: Vec<String> = (0..num_lines)
        .map(|_| generate_random_line(&mut rng, max_words_per_line, target_word_length + 2))
        .collect();

    let mut targets: Vec<String> = (0..num_target_words)
        .map(|_| generate_target_word(&mut rng, target_word_length.max(1)))
        .collect();
    targets.sort();
    targets.dedup();

    (lines, targets)
}
