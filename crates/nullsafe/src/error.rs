//! Runtime error type for invocation and conversion failures
//!
//! Absence never reaches this module: a missing attribute, a null value, or
//! a call on an absent proxy all produce an absent proxy, not an error.
//! These variants cover the failures that fall outside that contract, such
//! as invoking a present value that is not a function.

use thiserror::Error;

/// Errors raised by invocation and JSON conversion
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeError {
    /// A present value was invoked but is not a function
    #[error("Not callable: value of type {type_name}")]
    NotCallable { type_name: &'static str },
    /// A fixed-arity function received the wrong number of arguments
    #[error("Arity mismatch: function '{name}' expects {expected} argument(s), got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    /// Type error raised by a native function implementation
    #[error("Type error: {msg}")]
    TypeError { msg: String },
    /// The value has no JSON representation
    #[error("Cannot serialize: value of type {type_name}")]
    Unserializable { type_name: &'static str },
}
