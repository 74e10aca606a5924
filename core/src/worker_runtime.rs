// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use std::any::Any;

/// Defines a unit of work that can be executed
#[async_trait]
pub trait Runnable: Send + 'static {
    type Output: Send + 'static;
    async fn run(self) -> Self::Output;
}

/// Trait for abstracting worker runtime (tasks, threads)
pub trait WorkerRuntime<Task: Runnable>: Send + Sync + 'static {
    type Handle: Send;
    type Error: std::fmt::Display + Send;

    /// Spawn a worker task/thread
    fn spawn(worker_id: usize, task: Task) -> Self::Handle;

    /// Wait for the worker to complete and hand back what it produced
    fn join(
        handle: Self::Handle,
    ) -> impl std::future::Future<Output = Result<Task::Output, Self::Error>> + Send;
}

/// Best-effort text of a panic payload
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
