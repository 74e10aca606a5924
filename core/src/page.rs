// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::StatsError;
use std::fmt;
use std::sync::Arc;

/// A contiguous view over `len` items of a shared sequence, starting at `offset`.
/// Cloning a page clones the `Arc`, never the items.
pub struct Page<T> {
    items: Arc<[T]>,
    offset: usize,
    len: usize,
}

impl<T> Page<T> {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The items this page covers
    pub fn items(&self) -> &[T] {
        &self.items[self.offset..self.offset + self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items().iter()
    }
}

impl<T> Clone for Page<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            offset: self.offset,
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Page<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("offset", &self.offset)
            .field("len", &self.len)
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Split `items` into consecutive pages of at most `page_size` items.
///
/// Pages come back in source order. Every page except possibly the last holds
/// exactly `page_size` items, so there are `ceil(items.len() / page_size)` of
/// them; an empty input yields no pages.
pub fn paginate<T>(items: Arc<[T]>, page_size: usize) -> Result<Vec<Page<T>>, StatsError> {
    if page_size == 0 {
        return Err(StatsError::invalid_argument(
            "page size must be at least 1",
        ));
    }

    let total = items.len();
    let mut pages = Vec::with_capacity(total.div_ceil(page_size));
    let mut offset = 0;

    while offset < total {
        let len = std::cmp::min(page_size, total - offset);
        pages.push(Page {
            items: Arc::clone(&items),
            offset,
            len,
        });
        offset += len;
    }

    Ok(pages)
}
