//! `Query<T>`: a held sequence factory plus every operator as a method.
//!
//! Stage methods return a new `Query` wrapping the old one; nothing runs
//! until a terminal method or an explicit `iter()` pulls. Derived queries
//! inherit the config of the query they were built from.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use lazyq_core::callback::{Combine, Expander, KeySelector, Less, Mapper, Predicate};
use lazyq_core::config::QueryConfig;
use lazyq_core::render::write_list;
use lazyq_core::sequence::{Cursor, SeqRef, Sequence};
use lazyq_core::source::Source;

use lazyq_operators::{terminal, Expand, HashJoin, MapTo, Skip, Sort, Take, Where};

/// Start a query over an in-memory collection.
pub fn from<T, I>(items: I) -> Query<T>
where
    T: Clone + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
{
    Query::new(items)
}

pub struct Query<T> {
    seq: SeqRef<T>,
    config: Arc<QueryConfig>,
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            seq: Arc::clone(&self.seq),
            config: Arc::clone(&self.config),
        }
    }
}

impl<T> Query<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_sequence(Source::new(items))
    }
}

impl<T> Query<T>
where
    T: Send + Sync + 'static,
{
    /// Query a user-defined collection that implements `Sequence`.
    pub fn from_sequence<S>(seq: S) -> Self
    where
        S: Sequence<T> + 'static,
    {
        Self::from_shared(Arc::new(seq))
    }

    pub fn from_shared(seq: SeqRef<T>) -> Self {
        Self {
            seq,
            config: Arc::new(QueryConfig::default()),
        }
    }

    pub fn with_config(mut self, config: QueryConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// The underlying factory, for composing with hand-written operators.
    pub fn sequence(&self) -> SeqRef<T> {
        Arc::clone(&self.seq)
    }

    /// A fresh cursor for manual iteration.
    pub fn iter(&self) -> Cursor<T> {
        self.seq.iterate()
    }

    fn derive<R, S>(&self, seq: S) -> Query<R>
    where
        S: Sequence<R> + 'static,
    {
        Query {
            seq: Arc::new(seq),
            config: Arc::clone(&self.config),
        }
    }

    // ---- stage operators ----

    /// Where with a single predicate.
    pub fn filter<F>(&self, f: F) -> Query<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let pred: Predicate<T> = Arc::new(f);
        self.filter_all(vec![pred])
    }

    /// Where: keep elements satisfying all of `preds`. No predicates keeps everything.
    pub fn filter_all(&self, preds: Vec<Predicate<T>>) -> Query<T> {
        self.derive(Where::new(self.sequence(), preds))
    }

    /// MapTo: same-typed 1:1 transform.
    pub fn map_to<F>(&self, f: F) -> Query<T>
    where
        F: Fn(&T) -> T + Send + Sync + 'static,
    {
        self.map(f)
    }

    /// Type-changing 1:1 transform.
    pub fn map<R, F>(&self, f: F) -> Query<R>
    where
        R: Send + Sync + 'static,
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        let f: Mapper<T, R> = Arc::new(f);
        self.derive(MapTo::new(self.sequence(), f))
    }

    /// Expand: flat-map each element into zero or more elements.
    pub fn expand<F>(&self, f: F) -> Query<T>
    where
        F: Fn(&T) -> Vec<T> + Send + Sync + 'static,
    {
        self.expand_into(f)
    }

    /// Type-changing flat-map.
    pub fn expand_into<R, F>(&self, f: F) -> Query<R>
    where
        R: Send + Sync + 'static,
        F: Fn(&T) -> Vec<R> + Send + Sync + 'static,
    {
        let f: Expander<T, R> = Arc::new(f);
        self.derive(Expand::new(self.sequence(), f))
    }

    /// All but the first `n` elements. Negative `n` gives an empty query.
    pub fn skip(&self, n: i64) -> Query<T> {
        self.derive(Skip::new(self.sequence(), n))
    }

    /// At most the first `n` elements. `n <= 0` gives an empty query.
    pub fn take(&self, n: i64) -> Query<T> {
        self.derive(Take::new(self.sequence(), n))
    }

    /// Inner equi-join against `inner`.
    ///
    /// Preserves outer order and, for each outer element, the order of its
    /// matching inner elements. Outer elements without a match produce nothing.
    pub fn join<U, K, R, OK, IK, C>(
        &self,
        inner: &Query<U>,
        outer_key: OK,
        inner_key: IK,
        combine: C,
    ) -> Query<R>
    where
        U: Send + Sync + 'static,
        K: Hash + Eq + Send + 'static,
        R: Send + Sync + 'static,
        OK: Fn(&T) -> K + Send + Sync + 'static,
        IK: Fn(&U) -> K + Send + Sync + 'static,
        C: Fn(&T, &U) -> R + Send + Sync + 'static,
    {
        let outer_key: KeySelector<T, K> = Arc::new(outer_key);
        let inner_key: KeySelector<U, K> = Arc::new(inner_key);
        let combine: Combine<T, U, R> = Arc::new(combine);
        let join = HashJoin::new(self.sequence(), inner.sequence(), outer_key, inner_key, combine)
            .with_capacity_hint(self.config.join_capacity_hint);
        self.derive(join)
    }

    /// Stable sort by a single "less" comparator.
    pub fn sort_by<F>(&self, less: F) -> Query<T>
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        let less: Less<T> = Arc::new(less);
        self.sort(vec![less])
    }

    /// Stable sort by a comparator chain; earlier comparators take priority
    /// and the last one breaks ties. An empty chain keeps the original order.
    pub fn sort(&self, comparators: Vec<Less<T>>) -> Query<T> {
        let sort = Sort::new(self.sequence(), comparators)
            .with_capacity_hint(self.config.sort_capacity_hint);
        self.derive(sort)
    }

    // ---- terminal operators ----

    pub fn any<F>(&self, f: F) -> bool
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let pred: Predicate<T> = Arc::new(f);
        self.any_all(&[pred])
    }

    /// True if some element satisfies all of `preds`.
    pub fn any_all(&self, preds: &[Predicate<T>]) -> bool {
        terminal::any(&*self.seq, preds)
    }

    pub fn every<F>(&self, f: F) -> bool
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let pred: Predicate<T> = Arc::new(f);
        self.every_all(&[pred])
    }

    /// True if every element satisfies all of `preds`; true when empty.
    ///
    /// Scans the whole sequence unless `every_short_circuit` is configured.
    pub fn every_all(&self, preds: &[Predicate<T>]) -> bool {
        terminal::every(&*self.seq, preds, self.config.every_short_circuit)
    }

    pub fn contains(&self, needle: &T) -> bool
    where
        T: PartialEq,
    {
        terminal::contains(&*self.seq, needle)
    }

    pub fn is_empty(&self) -> bool {
        terminal::is_empty(&*self.seq)
    }

    pub fn first(&self) -> Option<T> {
        terminal::first(&*self.seq)
    }

    pub fn last(&self) -> Option<T> {
        terminal::last(&*self.seq)
    }

    /// Element at position `i`, or `None` if `i` is negative or out of range.
    pub fn at(&self, i: i64) -> Option<T> {
        terminal::at(&*self.seq, i)
    }

    pub fn fold<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        terminal::fold(&*self.seq, init, f)
    }

    /// Like `fold`, seeded with the first element. `None` when empty.
    pub fn reduce<F>(&self, f: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        terminal::reduce(&*self.seq, f)
    }

    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(T),
    {
        terminal::for_each(&*self.seq, f)
    }

    pub fn to_vec(&self) -> Vec<T> {
        terminal::to_vec(&*self.seq)
    }
}

impl<T> From<Vec<T>> for Query<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn from(items: Vec<T>) -> Self {
        Query::new(items)
    }
}

impl<T> FromIterator<T> for Query<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Query::new(iter)
    }
}

impl<'a, T: 'static> IntoIterator for &'a Query<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Cursor<T> {
        self.seq.iterate()
    }
}

/// Renders one fresh traversal as `[a b c]`.
impl<T: fmt::Display> fmt::Display for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.seq.iterate())
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("op", &self.seq.name())
            .field("config", &self.config)
            .finish()
    }
}
