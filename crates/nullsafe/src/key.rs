//! Navigation keys
//!
//! A `Key` is one step through a value graph: an attribute name resolved
//! against an object, or an element position resolved against an array.
//! Every other combination is a miss, and a miss is data (absence), not an
//! error.

use crate::value::Value;

/// One navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// Attribute name, resolved against `Value::Object`
    Name(String),
    /// Element position, resolved against `Value::Array`
    Index(usize),
}

impl Key {
    /// Resolve this key against a value.
    ///
    /// `Name` finds attributes on objects, `Index` finds elements in arrays.
    /// Any mismatch between key kind and value shape returns `None`, as does
    /// an unknown attribute or an out-of-range position.
    pub fn lookup<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        match (self, value) {
            (Key::Name(name), Value::Object(map)) => map.get(name),
            (Key::Index(index), Value::Array(list)) => list.get(*index),
            _ => None,
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}
