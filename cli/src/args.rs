// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RuntimeKind {
    /// One tokio task per worker
    Tokio,
    /// One OS thread per worker
    Thread,
}

/// Count exact occurrences of key words in text, scanning pages of lines in parallel
#[derive(Debug, Parser)]
#[command(name = "keyword-stats", version, about)]
pub struct Args {
    /// Key word to count (repeat for several)
    #[arg(short, long = "word", value_name = "WORD", required_unless_present = "generate")]
    pub words: Vec<String>,

    /// Input file (reads stdin when omitted)
    #[arg(short, long, value_name = "PATH", conflicts_with = "generate")]
    pub input: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Lines per page (overrides config)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Upper bound on concurrent workers, 0 for one per page (overrides config)
    #[arg(long)]
    pub max_workers: Option<usize>,

    #[arg(long, value_enum, default_value_t = RuntimeKind::Tokio)]
    pub runtime: RuntimeKind,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Show at most this many words in the text report
    #[arg(long, default_value_t = 20)]
    pub top: usize,

    /// Scan this many random lines instead of reading input
    #[arg(long, value_name = "LINES", conflicts_with = "words")]
    pub generate: Option<usize>,

    /// Number of random key words when generating input
    #[arg(long, default_value_t = 100)]
    pub target_count: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
