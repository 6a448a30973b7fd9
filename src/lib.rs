//! Context-compat: a calling-convention bridge for validators
//!
//! Hosts that run user-defined validators have handed over ambient context
//! (for example, the object being serialized) in two incompatible ways
//! across releases: older hosts call an explicit `set_context` on the
//! validator before invoking it, newer hosts check a `requires_context`
//! capability flag and pass the context straight into the invocation. A
//! validator written against one convention breaks under the other.
//!
//! This crate wraps validation logic so it works under both. The wrapped
//! strategy sees a single `validate(value, context)` capability, and the
//! adapter guarantees it observes exactly one consistent context value per
//! invocation, whichever path the host used to supply it.
//!
//! # Core Concepts
//!
//! - **ValidationStrategy**: the delegate seam; the logic being wrapped
//! - **ContextCompat**: the adapter holding the stored context and the
//!   capability flag, resolving per-call precedence (argument wins)
//! - **CallConvention**: an explicit model of the host's call site
//!
//! # Example
//!
//! ```rust
//! use context_compat::{ContextCompat, FnStrategy};
//!
//! let strategy = FnStrategy::new(|value: String, context: Option<&String>| {
//!     if value.is_empty() {
//!         Err("value must not be empty".to_string())
//!     } else {
//!         Ok(format!("{value} [{}]", context.cloned().unwrap_or_default()))
//!     }
//! });
//!
//! let mut validator = ContextCompat::new(strategy);
//!
//! // Legacy hosts store the context ahead of the call.
//! validator.set_context("request #42".to_string());
//! let out = validator.invoke("hello".to_string(), None).unwrap();
//! assert_eq!(out, "hello [request #42]");
//!
//! // Context-aware hosts pass it as an argument, which wins for that call.
//! let out = validator
//!     .invoke("hello".to_string(), Some(&"request #43".to_string()))
//!     .unwrap();
//! assert_eq!(out, "hello [request #43]");
//! ```

pub mod adapter;
pub mod convention;

// Re-export commonly used types
pub use adapter::{ContextCompat, FnStrategy, ValidationStrategy};
pub use convention::{drive, CallConvention};
