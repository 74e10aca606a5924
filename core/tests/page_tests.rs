// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use keyword_stats_core::{paginate, Page};
use rand::Rng;
use std::sync::Arc;

fn numbers(n: usize) -> Arc<[usize]> {
    (0..n).collect::<Vec<_>>().into()
}

fn flatten(pages: &[Page<usize>]) -> Vec<usize> {
    pages.iter().flat_map(|page| page.iter().copied()).collect()
}

#[test]
fn test_zero_page_size_is_rejected() {
    let result = paginate(numbers(10), 0);
    let err = result.unwrap_err();
    assert!(err.is_invalid_argument(), "unexpected error: {}", err);
}

#[test]
fn test_empty_input_yields_no_pages() {
    let pages = paginate(numbers(0), 3).unwrap();
    assert!(pages.is_empty());
}

#[test]
fn test_exact_multiple() {
    let pages = paginate(numbers(9), 3).unwrap();
    assert_eq!(pages.len(), 3);
    assert!(pages.iter().all(|page| page.len() == 3));
    assert_eq!(pages[2].items(), &[6, 7, 8]);
}

#[test]
fn test_last_page_holds_remainder() {
    let pages = paginate(numbers(10), 4).unwrap();
    let lens: Vec<_> = pages.iter().map(|page| page.len()).collect();
    assert_eq!(lens, vec![4, 4, 2]);

    let offsets: Vec<_> = pages.iter().map(|page| page.offset()).collect();
    assert_eq!(offsets, vec![0, 4, 8]);
}

#[test]
fn test_page_size_larger_than_input() {
    let pages = paginate(numbers(5), 2000).unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].len(), 5);
    assert_eq!(pages[0].offset(), 0);
}

#[test]
fn test_page_size_one() {
    let pages = paginate(numbers(4), 1).unwrap();
    assert_eq!(pages.len(), 4);
    for (i, page) in pages.iter().enumerate() {
        assert_eq!(page.items(), &[i]);
    }
}

#[test]
fn test_pages_share_the_input() {
    let items = numbers(6);
    let pages = paginate(Arc::clone(&items), 2).unwrap();
    // Every page holds a reference to the same allocation
    assert_eq!(Arc::strong_count(&items), 1 + pages.len());
    assert!(std::ptr::eq(&pages[1].items()[0], &items[2]));
}

#[test]
fn test_random_inputs_reassemble_and_respect_page_size() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let total = rng.random_range(0..500);
        let page_size = rng.random_range(1..=total.max(1) + 5);
        let pages = paginate(numbers(total), page_size).unwrap();

        assert_eq!(flatten(&pages), (0..total).collect::<Vec<_>>());
        assert_eq!(pages.len(), total.div_ceil(page_size));

        if let Some((last, rest)) = pages.split_last() {
            assert!(rest.iter().all(|page| page.len() == page_size));
            let expected_last = match total % page_size {
                0 => page_size,
                remainder => remainder,
            };
            assert_eq!(last.len(), expected_last);
        }
    }
}
