// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Number of lines per page when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 2000;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of lines in one page (must be at least 1)
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Upper bound on concurrent workers (0 = one worker per page)
    #[serde(default)]
    pub max_workers: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_workers: 0,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StatsError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    pub fn validate(&self) -> Result<(), StatsError> {
        if self.page_size == 0 {
            return Err(StatsError::invalid_argument(
                "page_size must be at least 1",
            ));
        }
        Ok(())
    }

    pub fn log_summary(&self) {
        let workers = if self.max_workers == 0 {
            "one per page".to_string()
        } else {
            self.max_workers.to_string()
        };
        info!(page_size = self.page_size, workers = %workers, "scan configuration");
    }
}
