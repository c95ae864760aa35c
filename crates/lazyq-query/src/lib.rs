#![forbid(unsafe_code)]
//! lazyq-query: the chainable `Query` facade.
//!
//! ```
//! use lazyq_query::from;
//!
//! let q = from(vec![4, 3, 7, 2, 5]).filter(|x| *x > 2).sort_by(|a, b| a < b);
//! assert_eq!(q.to_string(), "[3 4 5 7]");
//! ```

pub mod query;

pub use lazyq_core::prelude::*;
pub use query::{from, Query};
