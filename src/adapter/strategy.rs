//! The delegate seam: validation logic the adapter wraps.
//!
//! The adapter never validates anything itself. All real work is delegated
//! to a strategy exposing a single `validate(value, context)` capability.

use std::marker::PhantomData;

/// Validation logic that can be wrapped by the adapter.
///
/// A strategy receives the value under validation together with the ambient
/// context the host resolved for this call, if any. On success it returns
/// the value (possibly transformed); on failure it returns its own error
/// type. The adapter forwards both unchanged.
///
/// The context is deliberately optional: a host may invoke a validator
/// before any context exists, and strategies are expected to handle that.
///
/// # Example
///
/// ```rust
/// use context_compat::ValidationStrategy;
///
/// struct NonEmpty;
///
/// impl ValidationStrategy for NonEmpty {
///     type Value = String;
///     type Context = String;
///     type Error = String;
///
///     fn validate(
///         &self,
///         value: String,
///         _context: Option<&String>,
///     ) -> Result<String, String> {
///         if value.is_empty() {
///             Err("value must not be empty".to_string())
///         } else {
///             Ok(value)
///         }
///     }
/// }
///
/// let strategy = NonEmpty;
/// assert!(strategy.validate("hello".to_string(), None).is_ok());
/// assert!(strategy.validate(String::new(), None).is_err());
/// ```
pub trait ValidationStrategy {
    /// The type of value being validated.
    type Value;

    /// Ambient state supplied by the host, opaque to the adapter.
    type Context;

    /// The strategy's own failure type.
    type Error;

    /// Validate `value`, observing the resolved context if one exists.
    fn validate(
        &self,
        value: Self::Value,
        context: Option<&Self::Context>,
    ) -> Result<Self::Value, Self::Error>;
}

/// Strategy built from a plain function or closure.
///
/// Useful when the validation logic is a one-off and defining a dedicated
/// type would be noise.
///
/// # Example
///
/// ```rust
/// use context_compat::{FnStrategy, ValidationStrategy};
///
/// let positive = FnStrategy::new(|value: i64, _context: Option<&()>| {
///     if value > 0 {
///         Ok(value)
///     } else {
///         Err("value must be positive")
///     }
/// });
///
/// assert_eq!(positive.validate(3, None), Ok(3));
/// assert!(positive.validate(-1, None).is_err());
/// ```
pub struct FnStrategy<T, C, E> {
    validate: Box<dyn Fn(T, Option<&C>) -> Result<T, E> + Send + Sync>,
    _phantom: PhantomData<(T, C, E)>,
}

impl<T, C, E> FnStrategy<T, C, E> {
    /// Wrap a closure as a strategy.
    ///
    /// The closure must be thread-safe (Send + Sync) so the resulting
    /// strategy can cross thread boundaries with its host.
    pub fn new<F>(validate: F) -> Self
    where
        F: Fn(T, Option<&C>) -> Result<T, E> + Send + Sync + 'static,
    {
        FnStrategy {
            validate: Box::new(validate),
            _phantom: PhantomData,
        }
    }
}

impl<T, C, E> ValidationStrategy for FnStrategy<T, C, E> {
    type Value = T;
    type Context = C;
    type Error = E;

    fn validate(&self, value: T, context: Option<&C>) -> Result<T, E> {
        (self.validate)(value, context)
    }
}
