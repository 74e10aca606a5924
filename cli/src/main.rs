// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod args;
mod report;

use anyhow::{Context, Result};
use args::{Args, RuntimeKind};
use clap::Parser;
use keyword_stats_core::utils::generate_test_data;
use keyword_stats_core::{Config, Stats, ThreadRuntime, TokioRuntime};
use keyword_stats_word_search::{explore_key_words, read_lines, KeyWords};
use std::fs::File;
use std::io::{self, BufReader};
use std::time::Instant;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let start_time = Instant::now();

    let config = load_config(&args)?;
    config.log_summary();

    let (key_words, lines) = load_input(&args)?;
    info!(
        key_words = key_words.len(),
        lines = lines.len(),
        runtime = ?args.runtime,
        "starting scan"
    );

    let stats: Stats = match args.runtime {
        RuntimeKind::Tokio => explore_key_words::<TokioRuntime>(key_words, lines, &config).await?,
        RuntimeKind::Thread => explore_key_words::<ThreadRuntime>(key_words, lines, &config).await?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        report::print_results(&stats, args.top);
        println!("\nTotal time: {:.2}s", start_time.elapsed().as_secs_f64());
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .with_target(verbose >= 2)
        .with_thread_ids(verbose >= 2)
        .init();

    debug!("keyword-stats started with verbosity level: {}", verbose);
}

/// Config file first, then command-line overrides
fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(page_size) = args.page_size {
        config = config.with_page_size(page_size);
    }
    if let Some(max_workers) = args.max_workers {
        config = config.with_max_workers(max_workers);
    }

    config.validate()?;
    Ok(config)
}

fn load_input(args: &Args) -> Result<(KeyWords, Vec<String>)> {
    if let Some(num_lines) = args.generate {
        let (lines, targets) = generate_test_data(num_lines, 12, args.target_count, 3);
        info!(lines = lines.len(), targets = targets.len(), "generated random input");
        return Ok((KeyWords::new(targets), lines));
    }

    let key_words = KeyWords::new(args.words.iter().cloned());

    let lines = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            read_lines(BufReader::new(file))
                .with_context(|| format!("failed to read {}", path.display()))?
        }
        None => read_lines(io::stdin().lock()).context("failed to read stdin")?,
    };

    Ok((key_words, lines))
}
