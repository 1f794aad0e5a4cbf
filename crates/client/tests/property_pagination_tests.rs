//! Property-based tests for pagination.
//!
//! # Test Coverage
//! - Every item of every page is returned exactly once and in order
//! - The number of requests is `ceil(total / limit)`, and at least one
//! - Offsets requested are `0, limit, 2 * limit, ...`

use std::cell::RefCell;

use proptest::prelude::*;
use uptimerobot_client::endpoints::{Page, collect_pages};

fn serve(offset: usize, limit: usize, total: usize) -> Page<usize> {
    let end = (offset + limit).min(total);
    Page {
        offset,
        limit,
        total,
        items: (offset..end).collect(),
    }
}

fn expected_requests(total: usize, limit: usize) -> usize {
    total.div_ceil(limit).max(1)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 300,
        ..ProptestConfig::default()
    })]

    #[test]
    fn collect_pages_returns_every_item_once(total in 0usize..500, limit in 1usize..=100) {
        let requested = RefCell::new(Vec::new());
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();

        let items = runtime
            .block_on(collect_pages(0, |offset| {
                requested.borrow_mut().push(offset);
                async move { Ok(serve(offset, limit, total)) }
            }))
            .unwrap();

        prop_assert_eq!(items, (0..total).collect::<Vec<_>>());

        let requested = requested.into_inner();
        prop_assert_eq!(requested.len(), expected_requests(total, limit));
        for (page, offset) in requested.iter().enumerate() {
            prop_assert_eq!(*offset, page * limit);
        }
    }

    #[test]
    fn next_offset_stops_at_total(offset in 0usize..1000, limit in 0usize..100, total in 0usize..1000) {
        let page: Page<()> = Page { offset, limit, total, items: Vec::new() };
        match page.next_offset() {
            Some(next) => {
                prop_assert_eq!(next, offset + limit);
                prop_assert!(next < total);
            }
            None => prop_assert!(offset + limit >= total),
        }
    }
}
