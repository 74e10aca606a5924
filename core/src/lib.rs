// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod executor;
pub mod page;
pub mod page_job;
pub mod stats;
pub mod thread_runtime;
pub mod tokio_runtime;
pub mod utils;
pub mod worker_runtime;

pub use config::{Config, DEFAULT_PAGE_SIZE};
pub use dispatcher::{Dispatcher, ScanTask};
pub use error::StatsError;
pub use executor::Executor;
pub use page::{paginate, Page};
pub use page_job::PageJob;
pub use stats::Stats;
pub use thread_runtime::ThreadRuntime;
pub use tokio_runtime::TokioRuntime;
pub use worker_runtime::{Runnable, WorkerRuntime};
