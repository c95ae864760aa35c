//! MapTo and Expand: one-to-one and one-to-many element transforms.
//!
//! Neither caches: iterating twice calls the user function twice per element.

use lazyq_core::callback::{Expander, Mapper};
use lazyq_core::sequence::{Cursor, SeqRef, Sequence};

/// Lazy 1:1 transform. Order and cardinality are preserved.
pub struct MapTo<T, R = T> {
    upstream: SeqRef<T>,
    f: Mapper<T, R>,
}

impl<T, R> MapTo<T, R> {
    pub fn new(upstream: SeqRef<T>, f: Mapper<T, R>) -> Self {
        Self { upstream, f }
    }
}

impl<T, R> Sequence<R> for MapTo<T, R>
where
    T: 'static,
    R: 'static,
{
    fn name(&self) -> &'static str {
        "map"
    }

    fn iterate(&self) -> Cursor<R> {
        Box::new(MapCursor {
            inner: self.upstream.iterate(),
            f: self.f.clone(),
        })
    }
}

struct MapCursor<T, R> {
    inner: Cursor<T>,
    f: Mapper<T, R>,
}

impl<T, R> Iterator for MapCursor<T, R> {
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let elem = self.inner.next()?;
        Some((self.f)(&elem))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Lazy flat-map.
///
/// The output is the concatenation, in upstream order, of each element's
/// expansion. `f` runs at most once per outer element, and the next outer
/// element is only pulled once the current expansion is drained.
pub struct Expand<T, R = T> {
    upstream: SeqRef<T>,
    f: Expander<T, R>,
}

impl<T, R> Expand<T, R> {
    pub fn new(upstream: SeqRef<T>, f: Expander<T, R>) -> Self {
        Self { upstream, f }
    }
}

impl<T, R> Sequence<R> for Expand<T, R>
where
    T: 'static,
    R: Send + 'static,
{
    fn name(&self) -> &'static str {
        "expand"
    }

    fn iterate(&self) -> Cursor<R> {
        Box::new(ExpandCursor {
            outer: self.upstream.iterate(),
            f: self.f.clone(),
            state: ExpandState::NeedOuter,
        })
    }
}

enum ExpandState<R> {
    NeedOuter,
    HaveInner(std::vec::IntoIter<R>),
}

struct ExpandCursor<T, R> {
    outer: Cursor<T>,
    f: Expander<T, R>,
    state: ExpandState<R>,
}

impl<T, R> Iterator for ExpandCursor<T, R> {
    type Item = R;

    fn next(&mut self) -> Option<R> {
        loop {
            if let ExpandState::HaveInner(inner) = &mut self.state {
                if let Some(elem) = inner.next() {
                    return Some(elem);
                }
                self.state = ExpandState::NeedOuter;
            }
            let outer = self.outer.next()?;
            self.state = ExpandState::HaveInner((self.f)(&outer).into_iter());
        }
    }
}
