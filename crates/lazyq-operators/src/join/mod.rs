//! Equi-join over two sequences.
//!
//! Only the hash strategy exists: the inner side is drained into a lookup
//! table once per result cursor, then the outer side streams through it.

pub mod hash;
pub mod lookup;
