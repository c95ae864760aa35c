//! Shared data generators for integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// `len` integers starting at `start`, spaced by `step`.
pub fn stepped(start: i64, len: usize, step: i64) -> Vec<i64> {
    (0..len as i64).map(|i| start + step * i).collect()
}

/// Inclusive range `[begin, end]`, counting down when `end < begin`.
pub fn span(begin: i64, end: i64) -> Vec<i64> {
    if end < begin {
        stepped(begin, (begin - end + 1) as usize, -1)
    } else {
        stepped(begin, (end - begin + 1) as usize, 1)
    }
}

/// Deterministic permutation of `items` (multiplicative stride over a prime).
pub fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    let n = items.len();
    if n == 0 {
        return Vec::new();
    }
    const STRIDE: usize = 7_919;
    let stride = if n % STRIDE == 0 { 1 } else { STRIDE };
    (0..n).map(|i| items[(i * stride) % n].clone()).collect()
}

pub fn duplicate<T: Clone>(e: &T) -> Vec<T> {
    vec![e.clone(), e.clone()]
}

pub fn single<T: Clone>(e: &T) -> Vec<T> {
    vec![e.clone()]
}

/// Shared call counter to observe how often a callback ran.
#[derive(Clone, Default)]
pub struct Calls(Arc<AtomicUsize>);

impl Calls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.0.store(0, Ordering::SeqCst);
    }
}
