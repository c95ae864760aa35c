//! Lexicographic chain of "less than" comparators.

use std::cmp::Ordering;
use std::sync::Arc;

use lazyq_core::callback::Less;

/// Ordered list of strict "less" predicates, evaluated left to right.
///
/// Every comparator but the last decides only if it orders the pair in one
/// direction or the other. The last one decides ties directly and is never
/// checked in reverse. An empty chain considers every pair equal.
pub struct ComparatorChain<T> {
    chain: Arc<[Less<T>]>,
}

impl<T> Clone for ComparatorChain<T> {
    fn clone(&self) -> Self {
        Self {
            chain: Arc::clone(&self.chain),
        }
    }
}

impl<T> ComparatorChain<T> {
    pub fn new(chain: Vec<Less<T>>) -> Self {
        Self {
            chain: chain.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Composite "a sorts before b".
    pub fn less(&self, a: &T, b: &T) -> bool {
        let Some((last, init)) = self.chain.split_last() else {
            return false;
        };
        for less in init {
            if less(a, b) {
                return true;
            }
            if less(b, a) {
                return false;
            }
        }
        last(a, b)
    }

    /// Three-way form of `less` for the std stable sort.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}
