// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use keyword_stats_core::Stats;

/// Words by count descending, ties broken alphabetically
pub fn sorted_results(stats: &Stats) -> Vec<(&str, u64)> {
    let mut sorted: Vec<_> = stats
        .iter()
        .map(|(word, count)| (word.as_str(), *count))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    sorted
}

pub fn print_results(stats: &Stats, top: usize) {
    println!("\n=== RESULTS ===");
    let sorted = sorted_results(stats);

    for (word, count) in sorted.iter().take(top) {
        println!("{}: {}", word, count);
    }
    if sorted.len() > top {
        println!("... ({} more words)", sorted.len() - top);
    }

    println!("\nTotal occurrences found: {}", stats.total());
}
