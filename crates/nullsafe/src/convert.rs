//! Conversions into and out of the value model
//!
//! `From` impls cover Rust primitives, collections, and `serde_json::Value`,
//! so hosts can build value graphs from literals or loaded JSON. Conversion
//! back to JSON is fallible: function values have no JSON representation.

use crate::error::RuntimeError;
use crate::value::{Function, Value, ValueList, ValueMap};
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// Primitives
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

macro_rules! from_number {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

from_number!(i8 i16 i32 i64 u8 u16 u32 u64 usize isize f32);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Arc::new(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Arc::new(s))
    }
}

/// Unit converts to null, mirroring functions that return nothing.
impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

// ============================================================================
// Collections and functions
// ============================================================================

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl From<ValueList> for Value {
    fn from(list: ValueList) -> Self {
        Value::Array(list)
    }
}

impl From<ValueMap> for Value {
    fn from(map: ValueMap) -> Self {
        Value::Object(map)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(map: HashMap<String, Value>) -> Self {
        Value::Object(map.into())
    }
}

impl From<Function> for Value {
    fn from(func: Function) -> Self {
        Value::Function(func)
    }
}

// ============================================================================
// JSON interop
// ============================================================================

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(n) => Value::Number(n),
                // Unreachable without serde_json's arbitrary_precision feature
                None => Value::Null,
            },
            serde_json::Value::String(s) => Value::String(Arc::new(s)),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = RuntimeError;

    /// Convert back to JSON. Fails with `Unserializable` if the value graph
    /// contains a function anywhere. Non-finite numbers become JSON null,
    /// matching serde_json's own serializer.
    fn try_from(value: &Value) -> Result<Self, RuntimeError> {
        Ok(match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => match serde_json::Number::from_f64(*n) {
                Some(num) => serde_json::Value::Number(num),
                None => serde_json::Value::Null,
            },
            Value::String(s) => serde_json::Value::String(s.as_str().to_string()),
            Value::Array(list) => serde_json::Value::Array(
                list.iter()
                    .map(serde_json::Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(map) => {
                let mut out = serde_json::Map::with_capacity(map.len());
                for (key, val) in map.iter() {
                    out.insert(key.clone(), serde_json::Value::try_from(val)?);
                }
                serde_json::Value::Object(out)
            }
            Value::Function(_) => {
                return Err(RuntimeError::Unserializable {
                    type_name: value.type_name(),
                })
            }
        })
    }
}
