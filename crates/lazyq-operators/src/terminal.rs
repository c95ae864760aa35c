//! Terminal operators: drive one fresh cursor and return a plain value.
//!
//! None of these are lazy beyond that single pass. Queries over an empty
//! sequence or an out-of-range index return `None` rather than failing.

use lazyq_core::callback::{all_hold, Predicate};
use lazyq_core::sequence::Sequence;

/// True if some element satisfies every predicate. Stops at the first hit.
pub fn any<T>(seq: &dyn Sequence<T>, preds: &[Predicate<T>]) -> bool {
    seq.iterate().any(|elem| all_hold(preds, &elem))
}

/// True if every element satisfies every predicate; true on empty input.
///
/// With `short_circuit == false` the cursor is drained to the end even after
/// a failing element, so upstream callbacks see every element. Once a failure
/// is recorded the predicates themselves are not called again.
pub fn every<T>(seq: &dyn Sequence<T>, preds: &[Predicate<T>], short_circuit: bool) -> bool {
    let mut holds = true;
    for elem in seq.iterate() {
        holds = holds && all_hold(preds, &elem);
        if !holds && short_circuit {
            break;
        }
    }
    holds
}

/// True if some element equals `needle`.
pub fn contains<T: PartialEq>(seq: &dyn Sequence<T>, needle: &T) -> bool {
    seq.iterate().any(|elem| elem == *needle)
}

/// True iff a fresh cursor yields nothing. Pulls at most one element.
pub fn is_empty<T>(seq: &dyn Sequence<T>) -> bool {
    seq.iterate().next().is_none()
}

pub fn first<T>(seq: &dyn Sequence<T>) -> Option<T> {
    seq.iterate().next()
}

pub fn last<T>(seq: &dyn Sequence<T>) -> Option<T> {
    seq.iterate().last()
}

/// Element at zero-based position `i`; `None` if `i` is negative or past the end.
pub fn at<T>(seq: &dyn Sequence<T>, i: i64) -> Option<T> {
    let i = usize::try_from(i).ok()?;
    seq.iterate().nth(i)
}

/// Left-to-right accumulation from `init`. Empty input returns `init`.
pub fn fold<T, A, F>(seq: &dyn Sequence<T>, init: A, f: F) -> A
where
    F: FnMut(A, T) -> A,
{
    seq.iterate().fold(init, f)
}

/// Fold seeded with the first element. Empty input returns `None`.
pub fn reduce<T, F>(seq: &dyn Sequence<T>, f: F) -> Option<T>
where
    F: FnMut(T, T) -> T,
{
    seq.iterate().reduce(f)
}

pub fn for_each<T, F>(seq: &dyn Sequence<T>, f: F)
where
    F: FnMut(T),
{
    seq.iterate().for_each(f)
}

/// Materialize a snapshot, independent of `seq` afterwards.
pub fn to_vec<T>(seq: &dyn Sequence<T>) -> Vec<T> {
    seq.iterate().collect()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use lazyq_core::callback::predicate;
    use lazyq_core::source::Source;

    use super::*;
    use crate::map::MapTo;

    #[test]
    fn test_at_bounds() {
        let src = Source::new(vec![1, 2, 3, 4, 5]);
        assert_eq!(at(&src, 0), Some(1));
        assert_eq!(at(&src, 3), Some(4));
        assert_eq!(at(&src, 5), None);
        assert_eq!(at(&src, 15), None);
        assert_eq!(at(&src, -1), None);
    }

    #[test]
    fn test_every_scans_past_failure_unless_short_circuit() {
        let pulls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&pulls);
        let mapped: MapTo<i32> = MapTo::new(
            Arc::new(Source::new(vec![1, 2, 3, 4])),
            Arc::new(move |x: &i32| {
                counter.fetch_add(1, Ordering::SeqCst);
                *x
            }),
        );
        let below_two = predicate(|x: &i32| *x < 2);

        assert!(!every(&mapped, &[below_two.clone()], false));
        assert_eq!(pulls.load(Ordering::SeqCst), 4);

        pulls.store(0, Ordering::SeqCst);
        assert!(!every(&mapped, &[below_two], true));
        assert_eq!(pulls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_every_is_vacuously_true() {
        let src: Source<i32> = Source::new(vec![]);
        assert!(every(&src, &[predicate(|_: &i32| false)], false));
    }

    #[test]
    fn test_reduce_and_fold_on_empty() {
        let src: Source<i32> = Source::new(vec![]);
        assert_eq!(reduce(&src, |a, b| a + b), None);
        assert_eq!(fold(&src, 0, |a, b| a + b), 0);
        assert!(is_empty(&src));
        assert_eq!(first(&src), None);
        assert_eq!(last(&src), None);
    }
}
