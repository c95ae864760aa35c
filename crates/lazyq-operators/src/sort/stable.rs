//! Sort operator: drain, stable-sort, replay.
//!
//! Sorting cannot be lazy, so the first pull of a cursor drains the whole
//! upstream into a buffer owned by that cursor, sorts it with the comparator
//! chain, and then replays it. A fresh cursor re-reads upstream and sorts
//! again; nothing is cached on the operator.

use lazyq_core::callback::Less;
use lazyq_core::sequence::{Cursor, SeqRef, Sequence};

use crate::metrics;
use crate::sort::chain::ComparatorChain;

pub struct Sort<T> {
    upstream: SeqRef<T>,
    chain: ComparatorChain<T>,
    capacity_hint: usize,
}

impl<T> Sort<T> {
    pub fn new(upstream: SeqRef<T>, comparators: Vec<Less<T>>) -> Self {
        Self {
            upstream,
            chain: ComparatorChain::new(comparators),
            capacity_hint: 0,
        }
    }

    /// Pre-size the buffer each cursor drains into.
    pub fn with_capacity_hint(mut self, n: usize) -> Self {
        self.capacity_hint = n;
        self
    }
}

impl<T> Sequence<T> for Sort<T>
where
    T: Send + 'static,
{
    fn name(&self) -> &'static str {
        "sort"
    }

    fn iterate(&self) -> Cursor<T> {
        Box::new(SortCursor {
            state: SortState::Pending {
                upstream: self.upstream.clone(),
                chain: self.chain.clone(),
                capacity_hint: self.capacity_hint,
            },
        })
    }
}

enum SortState<T> {
    Pending {
        upstream: SeqRef<T>,
        chain: ComparatorChain<T>,
        capacity_hint: usize,
    },
    Sorted(std::vec::IntoIter<T>),
}

struct SortCursor<T> {
    state: SortState<T>,
}

impl<T> Iterator for SortCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let SortState::Pending {
            upstream,
            chain,
            capacity_hint,
        } = &self.state
        {
            let buf = sort_buffer(upstream.iterate(), chain, *capacity_hint);
            self.state = SortState::Sorted(buf.into_iter());
        }
        match &mut self.state {
            SortState::Sorted(rest) => rest.next(),
            SortState::Pending { .. } => None,
        }
    }
}

/// Drain `items` and stable-sort them by `chain`.
pub fn sort_buffer<I>(
    items: I,
    chain: &ComparatorChain<I::Item>,
    capacity_hint: usize,
) -> Vec<I::Item>
where
    I: Iterator,
{
    let (lower, _) = items.size_hint();
    let mut buf = Vec::new();
    // A hint that cannot be reserved is dropped; the buffer grows on demand.
    let _ = buf.try_reserve(capacity_hint.max(lower));
    buf.extend(items);
    if !chain.is_empty() {
        // `sort_by` is a stable merge sort.
        buf.sort_by(|a, b| chain.compare(a, b));
    }
    metrics::buffer_sorted("sort", buf.len(), chain.len());
    buf
}
