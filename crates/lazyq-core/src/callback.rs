//! Caller-supplied callbacks, stored as shared trait objects.
//!
//! Operators capture these by `Arc` so a sequence can be cloned into several
//! downstream chains and iterated from any thread without copying closures.

use std::sync::Arc;

/// Filter test; an element passes a `Where` only if every predicate holds.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Element-to-element transform used by `MapTo` and its type-changing variant.
pub type Mapper<T, R = T> = Arc<dyn Fn(&T) -> R + Send + Sync>;

/// Flat-map: one upstream element to zero or more output elements.
pub type Expander<T, R = T> = Arc<dyn Fn(&T) -> Vec<R> + Send + Sync>;

/// Derives the equi-join key of an element.
pub type KeySelector<T, K> = Arc<dyn Fn(&T) -> K + Send + Sync>;

/// Binary combination: join result selector, fold/reduce step.
pub type Combine<A, B, R> = Arc<dyn Fn(&A, &B) -> R + Send + Sync>;

/// Strict "less than" used to build a sort comparator chain.
pub type Less<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// Wrap a closure as a `Predicate`.
pub fn predicate<T, F>(f: F) -> Predicate<T>
where
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap a closure as a `Less` comparator.
pub fn less<T, F>(f: F) -> Less<T>
where
    F: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Evaluate the AND of `preds` against `elem`, stopping at the first `false`.
///
/// An empty list passes everything.
pub fn all_hold<T>(preds: &[Predicate<T>], elem: &T) -> bool {
    preds.iter().all(|p| p(elem))
}
