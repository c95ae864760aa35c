//! Source adapter: replays an in-memory collection.

use std::sync::Arc;

use crate::sequence::{Cursor, Sequence};

/// Wraps a fixed collection. Each cursor starts at index 0 and clones
/// elements out of the shared buffer in original order.
#[derive(Debug)]
pub struct Source<T> {
    items: Arc<[T]>,
}

impl<T> Source<T> {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Build a source over an already shared buffer without copying it.
    pub fn from_shared(items: Arc<[T]>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Clone for Source<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Sequence<T> for Source<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn name(&self) -> &'static str {
        "source"
    }

    fn iterate(&self) -> Cursor<T> {
        Box::new(SourceCursor {
            items: Arc::clone(&self.items),
            pos: 0,
        })
    }
}

/// Position state for one traversal of a `Source`.
pub struct SourceCursor<T> {
    items: Arc<[T]>,
    pos: usize,
}

impl<T: Clone> Iterator for SourceCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let elem = self.items.get(self.pos)?.clone();
        self.pos += 1;
        Some(elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.items.len().saturating_sub(self.pos);
        (left, Some(left))
    }
}
