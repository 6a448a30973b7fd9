//! Host call-site conventions for handing context to validators.
//!
//! Hosts differ in how they deliver ambient context: older releases call a
//! setter on the validator before invoking it, newer releases probe the
//! validator's capability flag and pass context as an invocation argument.
//! [`drive`] models that call site as an explicit two-armed branch.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adapter::{ContextCompat, ValidationStrategy};

/// How a host release hands ambient context to a validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallConvention {
    /// Context is supplied through `set_context` before the validator runs.
    Setter,

    /// Context is passed directly to the invocation, but only to validators
    /// whose capability flag opted in.
    Argument,
}

/// Run one validation cycle the way a host using `convention` would.
///
/// Under [`CallConvention::Setter`] the context is stored first and the
/// validator invoked with no argument. Under [`CallConvention::Argument`]
/// the validator's capability flag is checked once: opted-in validators
/// receive the context as an argument, the rest are invoked context-free.
///
/// # Example
///
/// ```rust
/// use context_compat::{drive, CallConvention, ContextCompat, FnStrategy};
///
/// let strategy = FnStrategy::new(|value: String, context: Option<&String>| {
///     match context {
///         Some(ctx) => Ok(format!("{value}@{ctx}")),
///         None => Err("context required".to_string()),
///     }
/// });
/// let mut validator = ContextCompat::new(strategy);
///
/// // Both host generations deliver the same context to the strategy.
/// let legacy = drive(
///     &mut validator,
///     CallConvention::Setter,
///     "id".to_string(),
///     "record-7".to_string(),
/// );
/// assert_eq!(legacy.unwrap(), "id@record-7");
///
/// let modern = drive(
///     &mut validator,
///     CallConvention::Argument,
///     "id".to_string(),
///     "record-8".to_string(),
/// );
/// assert_eq!(modern.unwrap(), "id@record-8");
/// ```
pub fn drive<S: ValidationStrategy>(
    validator: &mut ContextCompat<S>,
    convention: CallConvention,
    value: S::Value,
    context: S::Context,
) -> Result<S::Value, S::Error> {
    debug!(
        ?convention,
        requires_context = validator.requires_context(),
        "driving validator"
    );
    match convention {
        CallConvention::Setter => {
            validator.set_context(context);
            validator.invoke(value, None)
        }
        CallConvention::Argument if validator.requires_context() => {
            validator.invoke(value, Some(&context))
        }
        CallConvention::Argument => validator.invoke(value, None),
    }
}
