//! Where: keep the elements that satisfy every predicate.

use std::sync::Arc;

use lazyq_core::callback::{all_hold, Predicate};
use lazyq_core::sequence::{Cursor, SeqRef, Sequence};

/// Lazy filter.
///
/// An element passes only if all predicates return true. An empty predicate
/// list passes everything. Predicates run as the result is pulled, once per
/// predicate per visited element, stopping at the first `false`.
pub struct Where<T> {
    upstream: SeqRef<T>,
    preds: Arc<[Predicate<T>]>,
}

impl<T> Where<T> {
    pub fn new(upstream: SeqRef<T>, preds: Vec<Predicate<T>>) -> Self {
        Self {
            upstream,
            preds: preds.into(),
        }
    }
}

impl<T> Sequence<T> for Where<T>
where
    T: Send + 'static,
{
    fn name(&self) -> &'static str {
        "where"
    }

    fn iterate(&self) -> Cursor<T> {
        let inner = self.upstream.iterate();
        if self.preds.is_empty() {
            return inner;
        }
        Box::new(WhereCursor {
            inner,
            preds: Arc::clone(&self.preds),
        })
    }
}

struct WhereCursor<T> {
    inner: Cursor<T>,
    preds: Arc<[Predicate<T>]>,
}

impl<T> Iterator for WhereCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let elem = self.inner.next()?;
            if all_hold(&self.preds, &elem) {
                return Some(elem);
            }
        }
    }
}
