#![forbid(unsafe_code)]
//! lazyq-core: the pull-sequence abstraction and the types every operator shares.
//!
//! Design intent:
//! - A `Sequence` is a factory of fresh cursors, never a consumed iterator.
//! - Nothing in here is mutated after construction; operators wrap sequences
//!   in new sequences instead.
//! - No I/O, no async, no threads. Factories are `Send + Sync` so callers may
//!   hand them to other threads, but a single cursor is owned by one caller.

pub mod callback;
pub mod config;
pub mod error;
pub mod render;
pub mod sequence;
pub mod source;
pub mod value;

pub mod prelude;

pub use config::QueryConfig;
pub use error::{Error, Result};
pub use sequence::{Cursor, SeqRef, Sequence};
pub use source::Source;
pub use value::Value;
