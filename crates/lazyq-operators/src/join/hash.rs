//! Hash equi-join (inner join semantics).
//!
//! On the first pull the cursor drains `inner` into a `Lookup` keyed by
//! `inner_key`. It then streams `outer`: each outer element with a matching
//! group emits `combine(outer, inner)` once per group member, in group order,
//! before the next outer element is pulled. Unmatched outer elements emit
//! nothing.
//!
//! Output order is outer order, then inner-group order. Cost is O(|inner|) to
//! build and O(|outer| + |matches|) to drive.

use std::hash::Hash;

use lazyq_core::callback::{Combine, KeySelector};
use lazyq_core::sequence::{Cursor, SeqRef, Sequence};

use crate::join::lookup::Lookup;
use crate::metrics;

pub struct HashJoin<T, U, K, R> {
    outer: SeqRef<T>,
    inner: SeqRef<U>,
    outer_key: KeySelector<T, K>,
    inner_key: KeySelector<U, K>,
    combine: Combine<T, U, R>,
    capacity_hint: usize,
}

impl<T, U, K, R> HashJoin<T, U, K, R> {
    pub fn new(
        outer: SeqRef<T>,
        inner: SeqRef<U>,
        outer_key: KeySelector<T, K>,
        inner_key: KeySelector<U, K>,
        combine: Combine<T, U, R>,
    ) -> Self {
        Self {
            outer,
            inner,
            outer_key,
            inner_key,
            combine,
            capacity_hint: 0,
        }
    }

    /// Pre-size the lookup table built by each cursor.
    pub fn with_capacity_hint(mut self, n: usize) -> Self {
        self.capacity_hint = n;
        self
    }
}

impl<T, U, K, R> Sequence<R> for HashJoin<T, U, K, R>
where
    T: Send + 'static,
    U: Send + 'static,
    K: Hash + Eq + Send + 'static,
    R: 'static,
{
    fn name(&self) -> &'static str {
        "join"
    }

    fn iterate(&self) -> Cursor<R> {
        Box::new(JoinCursor {
            outer: self.outer.iterate(),
            inner: Some(self.inner.clone()),
            outer_key: self.outer_key.clone(),
            inner_key: self.inner_key.clone(),
            combine: self.combine.clone(),
            capacity_hint: self.capacity_hint,
            lookup: None,
            current: None,
        })
    }
}

/// The outer element being expanded and its position in the matched group.
struct Match<T> {
    outer: T,
    group: usize,
    pos: usize,
}

struct JoinCursor<T, U, K, R> {
    outer: Cursor<T>,
    /// Taken once the lookup is built.
    inner: Option<SeqRef<U>>,
    outer_key: KeySelector<T, K>,
    inner_key: KeySelector<U, K>,
    combine: Combine<T, U, R>,
    capacity_hint: usize,
    lookup: Option<Lookup<K, U>>,
    current: Option<Match<T>>,
}

impl<T, U, K, R> JoinCursor<T, U, K, R>
where
    K: Hash + Eq,
{
    /// Drain the inner side on the first pull.
    fn ensure_lookup(&mut self) {
        let Some(inner) = self.inner.take() else {
            return;
        };
        let key = &self.inner_key;
        let lut = Lookup::build(inner.iterate(), |e: &U| key(e), self.capacity_hint);
        metrics::lookup_built("join", lut.rows(), lut.num_groups());
        self.lookup = Some(lut);
    }
}

impl<T, U, K, R> Iterator for JoinCursor<T, U, K, R>
where
    K: Hash + Eq,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        self.ensure_lookup();
        let lut = self.lookup.as_ref()?;

        loop {
            if let Some(m) = &mut self.current {
                let group = lut.group(m.group);
                if let Some(inner) = group.get(m.pos) {
                    m.pos += 1;
                    return Some((self.combine)(&m.outer, inner));
                }
                self.current = None;
            }

            let outer = self.outer.next()?;
            let key = (self.outer_key)(&outer);
            if let Some(group) = lut.group_of(&key) {
                self.current = Some(Match {
                    outer,
                    group,
                    pos: 0,
                });
            }
        }
    }
}
