//! Offset/limit pagination for list methods.
//!
//! List methods report `offset`, `limit` and `total` with every page. Pages are
//! fetched sequentially until `offset + limit >= total`.

use std::future::Future;

use tracing::debug;

use crate::error::{ClientError, Result};

/// One page of a list method.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub offset: usize,
    pub limit: usize,
    pub total: usize,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// A final page with nothing in it.
    pub fn empty(offset: usize) -> Self {
        Self {
            offset,
            limit: 0,
            total: 0,
            items: Vec::new(),
        }
    }

    /// Offset of the following page, or `None` when this is the last one.
    pub fn next_offset(&self) -> Option<usize> {
        let next = self.offset.saturating_add(self.limit);
        (next < self.total).then_some(next)
    }
}

/// Fetch every page starting at `first_offset` and concatenate the items in order.
///
/// Any error aborts the walk and drops the pages collected so far.
pub async fn collect_pages<T, F, Fut>(first_offset: usize, mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut offset = first_offset;

    loop {
        let page = fetch(offset).await?;
        debug!(
            requested_offset = offset,
            offset = page.offset,
            limit = page.limit,
            total = page.total,
            count = page.items.len(),
            "Fetched page"
        );

        let next = page.next_offset();
        items.extend(page.items);

        let Some(next) = next else {
            break;
        };
        if page.limit == 0 {
            return Err(ClientError::InvalidResponse(format!(
                "page at offset {} reported limit 0 with {} items remaining",
                page.offset,
                page.total - page.offset
            )));
        }
        if next <= offset {
            return Err(ClientError::InvalidResponse(format!(
                "pagination did not advance past offset {offset}"
            )));
        }
        offset = next;
    }

    Ok(items)
}
