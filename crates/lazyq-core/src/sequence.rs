//! The pull-sequence contract.
//!
//! A `Sequence` is a factory: every call to `iterate` hands back a brand new
//! `Cursor` positioned at the start. Cursors are ordinary Rust iterators, so
//! "advance" is `next()` and exhaustion is `None`. Abandoning a cursor needs no
//! teardown.

use std::sync::Arc;

/// One traversal of a sequence. Owned exclusively by whoever called `iterate`.
pub type Cursor<T> = Box<dyn Iterator<Item = T> + Send>;

/// Shared handle to an immutable sequence factory.
pub type SeqRef<T> = Arc<dyn Sequence<T>>;

/// Trait that every source and operator implements.
///
/// Invariants:
/// - `iterate` must not mutate `self` or any shared state; two calls yield two
///   independent traversals.
/// - For a side-effect-free chain, two traversals produce identical streams.
/// - No caching: re-iterating re-invokes every caller-supplied callback.
pub trait Sequence<T>: Send + Sync {
    /// Human-readable operator name (stable), used for tracing and `Debug`.
    fn name(&self) -> &'static str;

    /// Produce a fresh cursor starting at the first element.
    fn iterate(&self) -> Cursor<T>;
}
