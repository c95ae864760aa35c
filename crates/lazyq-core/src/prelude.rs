//! Convenient re-exports for downstream crates.

pub use crate::callback::{less, predicate, Combine, Expander, KeySelector, Less, Mapper, Predicate};
pub use crate::config::QueryConfig;
pub use crate::error::{Error, Result};
pub use crate::render::{render_list, write_list};
pub use crate::sequence::{Cursor, SeqRef, Sequence};
pub use crate::source::Source;
pub use crate::value::Value;
