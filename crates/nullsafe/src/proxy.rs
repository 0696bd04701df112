//! Null-safe chaining proxy
//!
//! A `Proxy` wraps a value together with an absence flag. Navigation and
//! invocation always return another proxy, so chains never panic and never
//! need intermediate null checks. Once a chain goes absent it stays absent:
//! every further step is answered by an absent proxy.
//!
//! # Examples
//!
//! ```rust
//! use nullsafe::{wrap, Value};
//! use serde_json::json;
//!
//! let config = wrap(json!({
//!     "server": {"host": "localhost", "ports": [8000, 8001]}
//! }));
//!
//! // Present chain
//! assert_eq!(
//!     config.get("server").get_at("ports", 1).value(),
//!     &Value::Number(8001.0),
//! );
//!
//! // Absent chain - no panic, no error, just null
//! assert!(config.get("database").get("host").is_null());
//! ```

use crate::error::RuntimeError;
use crate::key::Key;
use crate::value::Value;

/// A value paired with its absence flag.
///
/// The flag is computed once, at construction, and never recomputed: a proxy
/// built from `Value::Null` is absent, anything else is present. All
/// navigation methods funnel through construction, so the flag is always
/// consistent with the wrapped value.
#[derive(Debug, Clone, PartialEq)]
pub struct Proxy {
    target: Value,
    absent: bool,
}

impl Proxy {
    /// Wrap a value directly.
    pub fn new(target: impl Into<Value>) -> Self {
        let target = target.into();
        let absent = target.is_null();
        Proxy { target, absent }
    }

    /// Wrap the value reached by walking `path` from `target`.
    ///
    /// Traversal short-circuits: at the first step that misses or resolves
    /// to null, the remaining keys are ignored and the result is absent.
    pub fn traverse<P>(target: impl Into<Value>, path: P) -> Self
    where
        P: IntoIterator,
        P::Item: Into<Key>,
    {
        let root = target.into();
        let mut current = &root;
        for key in path {
            if current.is_null() {
                return Proxy::null();
            }
            current = match key.into().lookup(current) {
                Some(found) => found,
                None => return Proxy::null(),
            };
        }
        Proxy::new(current.clone())
    }

    /// The canonical absent proxy.
    fn null() -> Self {
        Proxy {
            target: Value::Null,
            absent: true,
        }
    }

    /// The wrapped value. `Value::Null` when the proxy is absent.
    pub fn value(&self) -> &Value {
        &self.target
    }

    /// Consume the proxy and take the wrapped value.
    pub fn into_value(self) -> Value {
        self.target
    }

    /// `Some` when present, `None` when absent.
    pub fn as_option(&self) -> Option<&Value> {
        if self.absent {
            None
        } else {
            Some(&self.target)
        }
    }

    /// Whether the wrapped value is absent.
    ///
    /// Only null counts: zero, the empty string, empty collections, and
    /// `false` are all present.
    pub fn is_null(&self) -> bool {
        self.absent
    }

    /// Navigate to an attribute or element of the target.
    ///
    /// Returns an absent proxy when this proxy is absent, when the key
    /// misses, or when the resolved value is itself null. Never panics,
    /// never errors.
    pub fn get(&self, key: impl Into<Key>) -> Proxy {
        if self.absent {
            return Proxy::null();
        }
        match key.into().lookup(&self.target) {
            Some(found) => Proxy::new(found.clone()),
            None => Proxy::null(),
        }
    }

    /// Navigate to `key`, then to the element at `position` within it.
    ///
    /// Shorthand for an attribute lookup followed by an index lookup, with
    /// the same absence rules as [`get`](Proxy::get) at both steps.
    pub fn get_at(&self, key: impl Into<Key>, position: usize) -> Proxy {
        if self.absent {
            return Proxy::null();
        }
        let attribute = match key.into().lookup(&self.target) {
            Some(found) => found,
            None => return Proxy::null(),
        };
        match Key::Index(position).lookup(attribute) {
            Some(found) => Proxy::new(found.clone()),
            None => Proxy::null(),
        }
    }

    /// Invoke a method on the target, or the target itself.
    ///
    /// With `Some(name)` the named attribute is looked up and invoked; with
    /// `None` the wrapped target is invoked directly. Arguments are borrowed
    /// and collected into an owned list for [`apply`](Proxy::apply), which
    /// does the work.
    ///
    /// An absent proxy or an absent method yields `Ok` with an absent proxy.
    /// Errors surface only from invoking a present non-function, or from
    /// inside the function itself.
    pub fn call(&self, method: Option<&str>, args: &[Value]) -> Result<Proxy, RuntimeError> {
        self.apply(method, args.to_vec())
    }

    /// Invoke with an owned argument list.
    ///
    /// Same contract as [`call`](Proxy::call); `call` delegates here.
    pub fn apply(&self, method: Option<&str>, args: Vec<Value>) -> Result<Proxy, RuntimeError> {
        if self.absent {
            return Ok(Proxy::null());
        }
        let callee = match method {
            None => &self.target,
            Some(name) => match Key::from(name).lookup(&self.target) {
                Some(found) if !found.is_null() => found,
                // Missing or null method: absence, not an error
                _ => return Ok(Proxy::null()),
            },
        };
        match callee {
            Value::Function(func) => Ok(Proxy::new(func.invoke(&args)?)),
            other => Err(RuntimeError::NotCallable {
                type_name: other.type_name(),
            }),
        }
    }
}
