// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::StatsError;
use crate::page::Page;
use crate::page_job::PageJob;
use crate::worker_runtime::{Runnable, WorkerRuntime};
use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, error};

/// The pages handed to one worker, tagged with their position in the input
pub struct ScanTask<J: PageJob> {
    worker_id: usize,
    pages: Vec<(usize, Page<J::Item>)>,
    context: Arc<J::Context>,
}

#[async_trait]
impl<J: PageJob> Runnable for ScanTask<J> {
    type Output = Vec<(usize, J::Output)>;

    async fn run(self) -> Self::Output {
        debug!(
            worker_id = self.worker_id,
            pages = self.pages.len(),
            "worker started"
        );

        let context = &self.context;
        let results: Vec<_> = self
            .pages
            .iter()
            .map(|(index, page)| (*index, J::scan(page, context)))
            .collect();

        debug!(worker_id = self.worker_id, "worker finished");
        results
    }
}

/// Runs a page job over every page concurrently and collects the results in page order.
///
/// With `max_workers == 0` every page gets its own worker. Otherwise at most
/// `max_workers` workers are spawned and the pages are striped across them:
/// worker `w` takes pages `w`, `w + k`, `w + 2k`, ... for `k` workers.
///
/// Every spawned worker is joined before `dispatch` returns, including when
/// one of them fails. A failure is reported as [`StatsError::ScanFailure`] and
/// no results are returned alongside it.
pub struct Dispatcher<J, R> {
    max_workers: usize,
    _phantom: PhantomData<fn() -> (J, R)>,
}

impl<J, R> Dispatcher<J, R>
where
    J: PageJob,
    R: WorkerRuntime<ScanTask<J>>,
{
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers,
            _phantom: PhantomData,
        }
    }

    /// One worker per page
    pub fn unbounded() -> Self {
        Self::new(0)
    }

    /// How many workers a dispatch over `num_pages` pages spawns
    pub fn worker_count(&self, num_pages: usize) -> usize {
        if self.max_workers == 0 {
            num_pages
        } else {
            std::cmp::min(self.max_workers, num_pages)
        }
    }

    pub async fn dispatch(
        &self,
        pages: Vec<Page<J::Item>>,
        context: Arc<J::Context>,
    ) -> Result<Vec<J::Output>, StatsError> {
        let num_pages = pages.len();
        if num_pages == 0 {
            return Ok(Vec::new());
        }

        let num_workers = self.worker_count(num_pages);
        let mut assignments: Vec<Vec<(usize, Page<J::Item>)>> =
            (0..num_workers).map(|_| Vec::new()).collect();
        for (index, page) in pages.into_iter().enumerate() {
            assignments[index % num_workers].push((index, page));
        }

        debug!(num_pages, num_workers, "dispatching pages");

        // Spawn everything first, then join: no worker waits on another
        let handles: Vec<_> = assignments
            .into_iter()
            .enumerate()
            .map(|(worker_id, pages)| {
                let task = ScanTask::<J> {
                    worker_id,
                    pages,
                    context: Arc::clone(&context),
                };
                (worker_id, R::spawn(worker_id, task))
            })
            .collect();

        let mut slots: Vec<Option<J::Output>> = (0..num_pages).map(|_| None).collect();
        let mut failure = None;

        for (worker_id, handle) in handles {
            match R::join(handle).await {
                Ok(results) => {
                    for (index, output) in results {
                        slots[index] = Some(output);
                    }
                }
                Err(e) => {
                    error!(worker_id, error = %e, "worker failed");
                    if failure.is_none() {
                        failure = Some(StatsError::ScanFailure {
                            worker: worker_id,
                            reason: e.to_string(),
                        });
                    }
                }
            }
        }

        if let Some(err) = failure {
            return Err(err);
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.ok_or_else(|| StatsError::ScanFailure {
                    worker: index % num_workers,
                    reason: format!("page {} produced no result", index),
                })
            })
            .collect()
    }
}
