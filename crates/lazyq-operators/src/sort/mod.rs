//! Stable multi-key sort.

pub mod chain;
pub mod stable;
