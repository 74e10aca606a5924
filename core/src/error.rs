// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use thiserror::Error;

/// Errors surfaced by a keyword scan
#[derive(Debug, Error)]
pub enum StatsError {
    /// A caller-supplied argument violates a precondition (checked before any paging)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A worker failed while scanning its pages
    #[error("scan failed on worker {worker}: {reason}")]
    ScanFailure { worker: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl StatsError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        StatsError::InvalidArgument(message.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, StatsError::InvalidArgument(_))
    }

    pub fn is_scan_failure(&self) -> bool {
        matches!(self, StatsError::ScanFailure { .. })
    }
}
