//! Native function construction
//!
//! This module provides a builder for turning Rust closures into function
//! values that live inside a value graph and are invoked through the proxy.
//! Functions can be built with fixed arity (specific argument count) or
//! variadic (any argument count).
//!
//! # Examples
//!
//! ```rust
//! use nullsafe::{wrap, FunctionBuilder, RuntimeError, Value, ValueMap};
//!
//! let add = FunctionBuilder::new("add")
//!     .with_arity(2)
//!     .with_implementation(|args| {
//!         match (args[0].as_number(), args[1].as_number()) {
//!             (Some(a), Some(b)) => Ok(Value::Number(a + b)),
//!             _ => Err(RuntimeError::TypeError {
//!                 msg: "Expected number".to_string(),
//!             }),
//!         }
//!     })
//!     .build()
//!     .unwrap();
//!
//! let mut calc = ValueMap::new();
//! calc.insert("add", add);
//!
//! let result = wrap(Value::object(calc))
//!     .call(Some("add"), &[Value::Number(2.0), Value::Number(3.0)])
//!     .unwrap();
//! assert_eq!(result.value(), &Value::Number(5.0));
//! ```

use crate::error::RuntimeError;
use crate::value::{Function, NativeFn, Value};
use std::sync::Arc;

/// Type alias for the boxed implementation closure
type FnImpl = Box<dyn Fn(&[Value]) -> Result<Value, RuntimeError> + Send + Sync>;

/// Builder for constructing function values with arity validation
///
/// Fixed-arity functions reject calls with the wrong argument count before
/// the implementation runs. Variadic functions receive whatever arguments
/// the caller passed and validate them themselves.
pub struct FunctionBuilder {
    name: String,
    arity: Option<usize>,
    implementation: Option<FnImpl>,
}

impl FunctionBuilder {
    /// Create a new function builder with the given name
    ///
    /// The name appears in error messages and in the display form of the
    /// resulting value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nullsafe::FunctionBuilder;
    /// let builder = FunctionBuilder::new("my_function");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arity: None,
            implementation: None,
        }
    }

    /// Set the function's arity (required argument count)
    ///
    /// When arity is set, calls with too few or too many arguments fail with
    /// `RuntimeError::ArityMismatch` before the implementation runs.
    pub fn with_arity(mut self, arity: usize) -> Self {
        self.arity = Some(arity);
        self
    }

    /// Mark this function as variadic (accepts any number of arguments)
    ///
    /// Clears any previously set arity. Variadic implementations are
    /// responsible for validating the argument count themselves.
    pub fn variadic(mut self) -> Self {
        self.arity = None;
        self
    }

    /// Set the function implementation
    ///
    /// The implementation receives a slice of argument values and returns
    /// either a value or a runtime error. For fixed-arity functions, the
    /// argument count has already been validated when this closure runs.
    pub fn with_implementation<F>(mut self, implementation: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, RuntimeError> + Send + Sync + 'static,
    {
        self.implementation = Some(Box::new(implementation));
        self
    }

    /// Build the function value
    ///
    /// Wraps the implementation with arity validation (if specified) and
    /// returns a `Value::Function` ready to be placed in a value graph.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nullsafe::FunctionBuilder;
    /// let identity = FunctionBuilder::new("identity")
    ///     .with_arity(1)
    ///     .with_implementation(|args| Ok(args[0].clone()))
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn build(self) -> Result<Value, BuildError> {
        let implementation = self
            .implementation
            .ok_or_else(|| BuildError::MissingImplementation(self.name.clone()))?;

        let name = self.name;

        // Wrap implementation with arity validation if fixed arity
        let func: NativeFn = if let Some(expected) = self.arity {
            let fn_name = name.clone();
            Arc::new(move |args: &[Value]| {
                if args.len() != expected {
                    return Err(RuntimeError::ArityMismatch {
                        name: fn_name.clone(),
                        expected,
                        got: args.len(),
                    });
                }
                implementation(args)
            })
        } else {
            // Variadic - no arity validation
            Arc::new(move |args: &[Value]| implementation(args))
        };

        Ok(Value::Function(Function::new(name, func)))
    }
}

/// Errors that can occur when building a function
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// No implementation was provided
    MissingImplementation(String),
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::MissingImplementation(name) => {
                write!(f, "Function '{}' missing implementation", name)
            }
        }
    }
}

impl std::error::Error for BuildError {}
