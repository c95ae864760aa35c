//! Tagged-union element for heterogeneous collections.
//!
//! Generic `T` is the normal element type. `Value` exists for the cases where
//! one sequence carries records of different shapes (e.g. joining across
//! record types). Accessors never coerce: asking an `I64` for a string is a
//! `TypeMismatch`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::render::render_list;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::I64(_) => "i64",
            Value::F64(_) => "f64",
            Value::Str(_) => "str",
            Value::List(_) => "list",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch("bool", other)),
        }
    }

    pub fn as_i64(&self) -> Result<i64> {
        match self {
            Value::I64(i) => Ok(*i),
            other => Err(mismatch("i64", other)),
        }
    }

    pub fn as_f64(&self) -> Result<f64> {
        match self {
            Value::F64(f) => Ok(*f),
            other => Err(mismatch("f64", other)),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::Str(s) => Ok(s.as_str()),
            other => Err(mismatch("str", other)),
        }
    }

    pub fn as_list(&self) -> Result<&[Value]> {
        match self {
            Value::List(items) => Ok(items.as_slice()),
            other => Err(mismatch("list", other)),
        }
    }

    /// Checked cast into a concrete Rust type.
    pub fn cast<T>(&self) -> Result<T>
    where
        T: TryFrom<Value, Error = Error>,
    {
        T::try_from(self.clone())
    }

    /// Like `as_i64`, but a mismatch aborts the current pull.
    ///
    /// Meant for use inside callbacks, where a wrongly typed element is a
    /// programmer error rather than something to recover from.
    pub fn expect_i64(&self) -> i64 {
        self.as_i64().unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn expect_f64(&self) -> f64 {
        self.as_f64().unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn expect_str(&self) -> &str {
        self.as_str().unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn expect_list(&self) -> &[Value] {
        self.as_list().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Total order for sorting mixed values.
    ///
    /// Nulls sort first, same-typed values compare naturally, NaN sorts after
    /// every other float, and mixed types order by variant.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        use Value::*;

        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Null, _) => Ordering::Less,
            (_, Null) => Ordering::Greater,
            (Bool(x), Bool(y)) => x.cmp(y),
            (I64(x), I64(y)) => x.cmp(y),
            (F64(x), F64(y)) => {
                if x.is_nan() && y.is_nan() {
                    Ordering::Equal
                } else if x.is_nan() {
                    Ordering::Greater
                } else if y.is_nan() {
                    Ordering::Less
                } else {
                    x.partial_cmp(y).unwrap_or(Ordering::Equal)
                }
            }
            (Str(x), Str(y)) => x.cmp(y),
            (List(x), List(y)) => {
                for (a, b) in x.iter().zip(y.iter()) {
                    match a.total_cmp(b) {
                        Ordering::Equal => continue,
                        other => return other,
                    }
                }
                x.len().cmp(&y.len())
            }
            _ => type_order(self).cmp(&type_order(other)),
        }
    }
}

fn mismatch(expected: &'static str, found: &Value) -> Error {
    Error::TypeMismatch {
        expected,
        found: found.type_name(),
    }
}

fn type_order(v: &Value) -> u8 {
    match v {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::I64(_) => 2,
        Value::F64(_) => 3,
        Value::Str(_) => 4,
        Value::List(_) => 5,
    }
}

// Floats compare by a canonical bit pattern so `Value` can key a hash lookup
// and still agree with `total_cmp`: `-0.0` equals `0.0` and every NaN is one
// value.
fn float_key(f: f64) -> u64 {
    if f == 0.0 {
        0.0f64.to_bits()
    } else if f.is_nan() {
        f64::NAN.to_bits()
    } else {
        f.to_bits()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;
        match (self, other) {
            (Null, Null) => true,
            (Bool(a), Bool(b)) => a == b,
            (I64(a), I64(b)) => a == b,
            (F64(a), F64(b)) => float_key(*a) == float_key(*b),
            (Str(a), Str(b)) => a == b,
            (List(a), List(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        type_order(self).hash(state);
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::I64(i) => i.hash(state),
            Value::F64(f) => float_key(*f).hash(state),
            Value::Str(s) => s.hash(state),
            Value::List(items) => items.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("<nil>"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::I64(i) => write!(f, "{i}"),
            Value::F64(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => f.write_str(&render_list(items)),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::I64(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::I64(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::F64(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(v: Value) -> Result<Self> {
        v.as_bool()
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(v: Value) -> Result<Self> {
        v.as_i64()
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(v: Value) -> Result<Self> {
        v.as_f64()
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(v: Value) -> Result<Self> {
        match v {
            Value::Str(s) => Ok(s),
            other => Err(mismatch("str", &other)),
        }
    }
}

impl TryFrom<Value> for Vec<Value> {
    type Error = Error;

    fn try_from(v: Value) -> Result<Self> {
        match v {
            Value::List(items) => Ok(items),
            other => Err(mismatch("list", &other)),
        }
    }
}
