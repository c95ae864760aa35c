//! Skip and Take. Each cursor owns its own counter.

use lazyq_core::sequence::{Cursor, SeqRef, Sequence};

/// Drop the first `n` elements of every traversal.
///
/// A negative `n` yields an empty sequence: negative skip means "skip
/// everything", not "skip nothing".
pub struct Skip<T> {
    upstream: SeqRef<T>,
    n: i64,
}

impl<T> Skip<T> {
    pub fn new(upstream: SeqRef<T>, n: i64) -> Self {
        Self { upstream, n }
    }
}

impl<T> Sequence<T> for Skip<T>
where
    T: 'static,
{
    fn name(&self) -> &'static str {
        "skip"
    }

    fn iterate(&self) -> Cursor<T> {
        if self.n < 0 {
            return Box::new(std::iter::empty());
        }
        Box::new(SkipCursor {
            inner: self.upstream.iterate(),
            remaining: self.n as u64,
        })
    }
}

struct SkipCursor<T> {
    inner: Cursor<T>,
    remaining: u64,
}

impl<T> Iterator for SkipCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        while self.remaining > 0 {
            self.remaining -= 1;
            self.inner.next()?;
        }
        self.inner.next()
    }
}

/// Yield at most `n` leading elements. `n <= 0` yields nothing.
pub struct Take<T> {
    upstream: SeqRef<T>,
    n: i64,
}

impl<T> Take<T> {
    pub fn new(upstream: SeqRef<T>, n: i64) -> Self {
        Self { upstream, n }
    }
}

impl<T> Sequence<T> for Take<T>
where
    T: 'static,
{
    fn name(&self) -> &'static str {
        "take"
    }

    fn iterate(&self) -> Cursor<T> {
        if self.n <= 0 {
            return Box::new(std::iter::empty());
        }
        Box::new(TakeCursor {
            inner: self.upstream.iterate(),
            remaining: self.n as u64,
        })
    }
}

struct TakeCursor<T> {
    inner: Cursor<T>,
    remaining: u64,
}

impl<T> Iterator for TakeCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        // Never pull past the limit.
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.inner.next()
    }
}
