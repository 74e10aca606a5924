// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::worker_runtime::{panic_message, Runnable, WorkerRuntime};
use std::io;
use std::thread::{self, JoinHandle};
use thiserror::Error;

/// Thread-based runtime
///
/// Every worker gets its own OS thread, which drives the task to completion
/// on a private current-thread tokio runtime.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRuntime;

#[derive(Debug, Error)]
pub enum ThreadJoinError {
    #[error("failed to spawn worker thread: {0}")]
    Spawn(io::Error),

    #[error("failed to build worker runtime: {0}")]
    Runtime(io::Error),

    #[error("worker thread panicked: {0}")]
    Panicked(String),

    #[error("join task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Handle to a spawned worker thread. A spawn failure is kept and reported on join.
pub struct ThreadHandle<O> {
    inner: io::Result<JoinHandle<io::Result<O>>>,
}

impl<T> WorkerRuntime<T> for ThreadRuntime
where
    T: Runnable,
{
    type Handle = ThreadHandle<T::Output>;
    type Error = ThreadJoinError;

    fn spawn(worker_id: usize, task: T) -> Self::Handle {
        let inner = thread::Builder::new()
            .name(format!("keyword-worker-{}", worker_id))
            .spawn(move || -> io::Result<T::Output> {
                let rt = tokio::runtime::Builder::new_current_thread().build()?;
                Ok(rt.block_on(task.run()))
            });
        ThreadHandle { inner }
    }

    async fn join(handle: Self::Handle) -> Result<T::Output, Self::Error> {
        let join_handle = handle.inner.map_err(ThreadJoinError::Spawn)?;

        // Blocking join must stay off the async executor
        let joined = tokio::task::spawn_blocking(move || join_handle.join()).await?;

        match joined {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(e)) => Err(ThreadJoinError::Runtime(e)),
            Err(payload) => Err(ThreadJoinError::Panicked(panic_message(&*payload))),
        }
    }
}
