// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::worker_runtime::{Runnable, WorkerRuntime};
use tokio::task::{self, JoinError, JoinHandle};

/// Tokio task-based runtime
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioRuntime;

impl<T> WorkerRuntime<T> for TokioRuntime
where
    T: Runnable,
{
    type Handle = JoinHandle<T::Output>;
    type Error = JoinError;

    fn spawn(_worker_id: usize, task: T) -> Self::Handle {
        task::spawn(task.run())
    }

    async fn join(handle: Self::Handle) -> Result<T::Output, Self::Error> {
        handle.await
    }
}
