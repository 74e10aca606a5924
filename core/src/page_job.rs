// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::page::Page;

/// Trait that defines the work done on a single page
/// Abstracts the scan domain from the execution model
pub trait PageJob: Send + Sync + 'static {
    /// The element type of the paged input
    type Item: Send + Sync + 'static;

    /// Read-only context shared by every worker (e.g., the words to look for)
    type Context: Send + Sync + 'static;

    /// What one page produces
    type Output: Send + 'static;

    /// Scan one page. Must not depend on anything but its arguments.
    fn scan(page: &Page<Self::Item>, context: &Self::Context) -> Self::Output;
}
