//! Query configuration that callers can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Initial capacity of a join's key lookup table. Zero lets the map grow.
    pub join_capacity_hint: usize,

    /// Initial capacity of the sort buffer. Zero uses the upstream size hint.
    pub sort_capacity_hint: usize,

    /// When false, `every` visits every element even after a failure.
    /// When true it stops at the first failing element; only observable if
    /// predicates have side effects.
    pub every_short_circuit: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            join_capacity_hint: 0,
            sort_capacity_hint: 0,
            every_short_circuit: false,
        }
    }
}

impl QueryConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `LAZYQ_JOIN_CAPACITY_HINT`: join lookup table capacity
    /// - `LAZYQ_SORT_CAPACITY_HINT`: sort buffer capacity
    /// - `LAZYQ_EVERY_SHORT_CIRCUIT`: `true`/`false`
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("LAZYQ_JOIN_CAPACITY_HINT") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.join_capacity_hint = v;
            }
        }

        if let Ok(s) = std::env::var("LAZYQ_SORT_CAPACITY_HINT") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.sort_capacity_hint = v;
            }
        }

        if let Ok(s) = std::env::var("LAZYQ_EVERY_SHORT_CIRCUIT") {
            if let Ok(v) = s.parse::<bool>() {
                cfg.every_short_circuit = v;
            }
        }

        cfg
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn with_join_capacity_hint(mut self, n: usize) -> Self {
        self.join_capacity_hint = n;
        self
    }

    pub fn with_sort_capacity_hint(mut self, n: usize) -> Self {
        self.sort_capacity_hint = n;
        self
    }

    pub fn with_every_short_circuit(mut self, on: bool) -> Self {
        self.every_short_circuit = on;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_from_json_fills_defaults() {
        let cfg = QueryConfig::from_json(r#"{"every_short_circuit": true}"#).unwrap();
        assert!(cfg.every_short_circuit);
        assert_eq!(cfg.join_capacity_hint, 0);
    }

    #[test]
    fn test_from_json_rejects_bad_types() {
        let err = QueryConfig::from_json(r#"{"join_capacity_hint": "lots"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
