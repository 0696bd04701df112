//! Nullsafe - Null-safe chaining over dynamic values
//!
//! This library provides the complete null-safe navigation surface:
//! - A dynamic value model (null, bool, number, string, array, object, function)
//! - A chaining proxy whose navigation never panics and never raises on absence
//! - Native function construction with arity validation
//! - Conversions to and from `serde_json::Value`
//!
//! Absence is structural: the only absent value is null, and once a chain
//! goes absent every further `get`, `call`, or `apply` stays absent. The
//! chain ends with [`Proxy::value`] or [`Proxy::is_null`].
//!
//! # Examples
//!
//! ```rust
//! use nullsafe::{wrap, Value};
//! use serde_json::json;
//!
//! let user = wrap(json!({
//!     "name": "Ada",
//!     "teams": [{"id": 7}]
//! }));
//!
//! assert_eq!(user.get("name").value(), &Value::string("Ada"));
//! assert_eq!(user.get_at("teams", 0).get("id").value(), &Value::Number(7.0));
//! assert!(user.get("email").get("domain").is_null());
//! ```

/// Nullsafe library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod error;
pub mod key;
pub mod native;
pub mod proxy;
pub mod value;

mod convert;

// Re-export commonly used types
pub use error::RuntimeError;
pub use key::Key;
pub use native::{BuildError, FunctionBuilder};
pub use proxy::Proxy;
pub use value::{Function, NativeFn, Value, ValueList, ValueMap};

/// Wrap a value in a null-safe proxy.
///
/// Shorthand for [`Proxy::new`].
///
/// # Examples
///
/// ```rust
/// use nullsafe::wrap;
/// use serde_json::json;
///
/// assert!(wrap(json!(null)).is_null());
/// assert!(!wrap(json!(0)).is_null());
/// ```
pub fn wrap(target: impl Into<Value>) -> Proxy {
    Proxy::new(target)
}

/// Wrap the value reached by walking `path` from `target`.
///
/// Shorthand for [`Proxy::traverse`]. Traversal short-circuits at the first
/// absent step.
///
/// # Examples
///
/// ```rust
/// use nullsafe::{wrap_path, Key, Value};
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": [10, 20]}});
/// let proxy = wrap_path(doc, [Key::from("a"), Key::from("b"), Key::from(1usize)]);
/// assert_eq!(proxy.value(), &Value::Number(20.0));
///
/// assert!(wrap_path(json!({"a": null}), ["a", "b"]).is_null());
/// ```
pub fn wrap_path<P>(target: impl Into<Value>, path: P) -> Proxy
where
    P: IntoIterator,
    P::Item: Into<Key>,
{
    Proxy::traverse(target, path)
}
