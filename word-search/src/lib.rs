// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod key_words;
pub mod line_source;

pub use key_words::KeyWords;
pub use line_source::read_lines;

use keyword_stats_core::{
    Config, Executor, Page, PageJob, ScanTask, Stats, StatsError, TokioRuntime, WorkerRuntime,
};
use std::io::BufRead;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Key word search job - counts exact occurrences of key words in text lines
pub struct KeyWordSearch;

impl PageJob for KeyWordSearch {
    type Item = String;
    type Context = KeyWords;
    type Output = Stats;

    fn scan(page: &Page<Self::Item>, context: &Self::Context) -> Self::Output {
        explore_page(page, context)
    }
}

/// Count the key words in one page.
///
/// Lines are split on single spaces; empty tokens are skipped. Matching is
/// exact, so case and punctuation matter and a key word embedded in a longer
/// token does not count.
pub fn explore_page(page: &Page<String>, key_words: &KeyWords) -> Stats {
    let mut stats = Stats::new();

    for line in page {
        for token in line.split(' ') {
            if !token.is_empty() && key_words.contains(token) {
                stats.record(token);
            }
        }
    }

    stats
}

/// Count key words across `lines`, scanning pages concurrently on runtime `R`
pub async fn explore_key_words<R>(
    key_words: KeyWords,
    lines: Vec<String>,
    config: &Config,
) -> Result<Stats, StatsError>
where
    R: WorkerRuntime<ScanTask<KeyWordSearch>>,
{
    let start = Instant::now();
    let executor = Executor::<KeyWordSearch, R>::new(config.clone())?;

    let num_lines = lines.len();
    let partials = executor.execute(lines.into(), Arc::new(key_words)).await?;
    let num_pages = partials.len();
    let stats = Stats::merge(partials);

    info!(
        num_lines,
        num_pages,
        distinct_words = stats.len(),
        occurrences = stats.total(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "key word scan complete"
    );
    Ok(stats)
}

/// Read all lines from `reader`, then count key words across them
pub async fn explore_key_words_from_reader<R, B>(
    key_words: KeyWords,
    reader: B,
    config: &Config,
) -> Result<Stats, StatsError>
where
    R: WorkerRuntime<ScanTask<KeyWordSearch>>,
    B: BufRead,
{
    config.validate()?;
    let lines = read_lines(reader)?;
    explore_key_words::<R>(key_words, lines, config).await
}

/// Count key words on tokio tasks, one task per page of `DEFAULT_PAGE_SIZE` lines
pub async fn count_key_words(
    key_words: KeyWords,
    lines: Vec<String>,
) -> Result<Stats, StatsError> {
    explore_key_words::<TokioRuntime>(key_words, lines, &Config::default()).await
}

/// Count key words on tokio tasks, one task per page of `page_size` lines
pub async fn count_target_words(
    key_words: KeyWords,
    lines: Vec<String>,
    page_size: usize,
) -> Result<Stats, StatsError> {
    let config = Config::default().with_page_size(page_size);
    explore_key_words::<TokioRuntime>(key_words, lines, &config).await
}
