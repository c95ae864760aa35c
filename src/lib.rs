#![forbid(unsafe_code)]
//! lazyq: lazy, composable LINQ-style queries over in-memory sequences.
//!
//! This crate re-exports the workspace members so callers depend on one name:
//! - `lazyq_core`: the `Sequence` contract, `Source`, `Value`, config, errors
//! - `lazyq_operators`: the operator implementations
//! - `lazyq_query`: the chainable `Query` facade

pub use lazyq_core;
pub use lazyq_operators;

pub use lazyq_query::*;
