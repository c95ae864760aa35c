#![forbid(unsafe_code)]
//! lazyq-operators: lazy stage operators (where/map/expand/skip/take),
//! hash join, stable multi-key sort, and terminal operators.
//!
//! Design intent:
//! - Every stage operator is a `Sequence` that holds its upstream `SeqRef`
//!   and hands out its own cursor type. Nothing is pulled until a cursor is.
//! - Join and Sort are the only operators that buffer; each cursor builds and
//!   owns its buffer on the first pull.
//! - Terminal operators drive exactly one fresh cursor.

pub mod filter;
pub mod map;
pub mod metrics;
pub mod slice;
pub mod terminal;

pub mod join;
pub mod sort;

pub use filter::Where;
pub use join::hash::HashJoin;
pub use map::{Expand, MapTo};
pub use slice::{Skip, Take};
pub use sort::chain::ComparatorChain;
pub use sort::stable::Sort;
