//! Tracing hooks for the buffering operators.
//!
//! Compiled to no-ops unless the `tracing` feature is on. Cursors of the
//! streaming operators emit nothing; they sit on the hot path.

#[cfg(feature = "tracing")]
pub fn lookup_built(op: &'static str, rows: usize, groups: usize) {
    tracing::trace!(op, rows, groups, "join lookup built");
}

#[cfg(not(feature = "tracing"))]
pub fn lookup_built(_op: &'static str, _rows: usize, _groups: usize) { /* no-op */
}

#[cfg(feature = "tracing")]
pub fn buffer_sorted(op: &'static str, rows: usize, comparators: usize) {
    tracing::trace!(op, rows, comparators, "sort buffer materialized");
}

#[cfg(not(feature = "tracing"))]
pub fn buffer_sorted(_op: &'static str, _rows: usize, _comparators: usize) { /* no-op */
}
