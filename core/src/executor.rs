// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::config::Config;
use crate::dispatcher::{Dispatcher, ScanTask};
use crate::error::StatsError;
use crate::page::paginate;
use crate::page_job::PageJob;
use crate::worker_runtime::WorkerRuntime;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Pages the input and dispatches a job over it
/// Generic over the page job and the worker runtime
pub struct Executor<J, R> {
    config: Config,
    _phantom: PhantomData<fn() -> (J, R)>,
}

impl<J, R> Executor<J, R>
where
    J: PageJob,
    R: WorkerRuntime<ScanTask<J>>,
{
    /// Rejects an invalid config before any work is done
    pub fn new(config: Config) -> Result<Self, StatsError> {
        config.validate()?;
        Ok(Self {
            config,
            _phantom: PhantomData,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Per-page outputs, in page order
    pub async fn execute(
        &self,
        items: Arc<[J::Item]>,
        context: Arc<J::Context>,
    ) -> Result<Vec<J::Output>, StatsError> {
        let start = Instant::now();
        let num_items = items.len();

        let pages = paginate(items, self.config.page_size)?;
        let num_pages = pages.len();

        let dispatcher = Dispatcher::<J, R>::new(self.config.max_workers);
        let outputs = dispatcher.dispatch(pages, context).await?;

        debug!(
            num_items,
            num_pages,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "all pages scanned"
        );
        Ok(outputs)
    }
}
