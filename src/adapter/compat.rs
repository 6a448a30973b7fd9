//! The context-compatibility adapter.
//!
//! Bridges the two conventions a host may use to hand ambient context to a
//! validator: an explicit setter call before invocation, or a direct
//! argument to the invocation itself.

use tracing::trace;

use super::strategy::ValidationStrategy;

/// Adapter wrapping a validation strategy behind both calling conventions.
///
/// Hosts built before context-aware invocation call [`set_context`] and then
/// invoke the validator with no context argument. Newer hosts read
/// [`requires_context`] and pass the context straight into [`invoke`]. The
/// adapter accepts either path and guarantees the wrapped strategy observes
/// exactly one context value per invocation: a context supplied as an
/// argument wins over one stored earlier in the cycle.
///
/// The adapter introduces no failure modes of its own. Whatever the wrapped
/// strategy returns, success or error, passes through unchanged.
///
/// [`set_context`]: ContextCompat::set_context
/// [`requires_context`]: ContextCompat::requires_context
/// [`invoke`]: ContextCompat::invoke
///
/// # Example
///
/// ```rust
/// use context_compat::{ContextCompat, FnStrategy};
///
/// let strategy = FnStrategy::new(|value: String, context: Option<&String>| {
///     match context {
///         Some(ctx) => Ok(format!("{value} (seen by {ctx})")),
///         None => Ok(value),
///     }
/// });
///
/// let mut validator: ContextCompat<_> = ContextCompat::new(strategy);
/// assert!(validator.requires_context());
///
/// // Older hosts store the context ahead of the call.
/// validator.set_context("serializer".to_string());
/// let out: Result<String, String> = validator.invoke("name".to_string(), None);
/// assert_eq!(out.unwrap(), "name (seen by serializer)");
/// ```
pub struct ContextCompat<S: ValidationStrategy> {
    strategy: S,
    context: Option<S::Context>,
    requires_context: bool,
}

impl<S: ValidationStrategy> ContextCompat<S> {
    /// Wrap a strategy.
    ///
    /// The context starts unset and the capability flag starts true, so
    /// context-aware hosts will pass context as an argument.
    pub fn new(strategy: S) -> Self {
        ContextCompat {
            strategy,
            context: None,
            requires_context: true,
        }
    }

    /// Override the capability flag.
    ///
    /// A validator that reports false here tells context-aware hosts not to
    /// pass context as an argument; such hosts invoke it context-free.
    pub fn with_requires_context(mut self, requires_context: bool) -> Self {
        self.requires_context = requires_context;
        self
    }

    /// Whether this validator wants context passed as an invocation argument.
    ///
    /// Read by hosts to decide which calling convention to use.
    pub fn requires_context(&self) -> bool {
        self.requires_context
    }

    /// Store a context for later invocations.
    ///
    /// This is the legacy entry point. Any value is accepted; a later call
    /// replaces the stored value. Storing the same context twice is
    /// indistinguishable from storing it once.
    pub fn set_context(&mut self, context: S::Context) {
        trace!("context stored ahead of invocation");
        self.context = Some(context);
    }

    /// Run the wrapped strategy with the resolved context.
    ///
    /// A context supplied as the argument is used for this call and takes
    /// precedence over anything stored via [`set_context`]. With no argument,
    /// the stored context is used; with neither, the strategy observes no
    /// context at all. The strategy's result or error is returned unchanged.
    ///
    /// [`set_context`]: ContextCompat::set_context
    pub fn invoke(
        &self,
        value: S::Value,
        context: Option<&S::Context>,
    ) -> Result<S::Value, S::Error> {
        let source = if context.is_some() {
            "argument"
        } else if self.context.is_some() {
            "stored"
        } else {
            "unset"
        };
        trace!(source, "validator context resolved");

        let resolved = context.or(self.context.as_ref());
        self.strategy.validate(value, resolved)
    }

    /// Borrow the wrapped strategy.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::strategy::FnStrategy;

    // Echoes the context it observed into the output so tests can assert on
    // exactly what the strategy saw.
    fn observing_strategy() -> FnStrategy<String, String, String> {
        FnStrategy::new(|value: String, context: Option<&String>| {
            Ok(format!("{value}|{}", context.cloned().unwrap_or_default()))
        })
    }

    #[test]
    fn stored_context_reaches_strategy() {
        let mut validator = ContextCompat::new(observing_strategy());
        validator.set_context("ctx-A".to_string());

        let out = validator.invoke("hello".to_string(), None).unwrap();
        assert_eq!(out, "hello|ctx-A");
    }

    #[test]
    fn argument_overrides_stored_context() {
        let mut validator = ContextCompat::new(observing_strategy());
        validator.set_context("ctx-A".to_string());

        let out = validator
            .invoke("hello".to_string(), Some(&"ctx-B".to_string()))
            .unwrap();
        assert_eq!(out, "hello|ctx-B");
    }

    #[test]
    fn unset_context_resolves_to_none() {
        let strategy: FnStrategy<String, String, String> =
            FnStrategy::new(|value, context| {
                assert!(context.is_none());
                Ok(value)
            });
        let validator = ContextCompat::new(strategy);

        let out = validator.invoke("hello".to_string(), None).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn requires_context_defaults_to_true() {
        let validator = ContextCompat::new(observing_strategy());
        assert!(validator.requires_context());
    }

    #[test]
    fn requires_context_can_be_disabled() {
        let validator = ContextCompat::new(observing_strategy()).with_requires_context(false);
        assert!(!validator.requires_context());
    }

    #[test]
    fn set_context_twice_is_idempotent() {
        let mut once = ContextCompat::new(observing_strategy());
        once.set_context("ctx-A".to_string());

        let mut twice = ContextCompat::new(observing_strategy());
        twice.set_context("ctx-A".to_string());
        twice.set_context("ctx-A".to_string());

        assert_eq!(
            once.invoke("hello".to_string(), None).unwrap(),
            twice.invoke("hello".to_string(), None).unwrap()
        );
    }

    #[test]
    fn last_stored_context_wins() {
        let mut validator = ContextCompat::new(observing_strategy());
        validator.set_context("ctx-A".to_string());
        validator.set_context("ctx-B".to_string());

        let out = validator.invoke("hello".to_string(), None).unwrap();
        assert_eq!(out, "hello|ctx-B");
    }

    #[test]
    fn strategy_error_passes_through() {
        let strategy = FnStrategy::new(|value: String, _context: Option<&String>| {
            if value.is_empty() {
                Err("value must not be empty".to_string())
            } else {
                Ok(value)
            }
        });
        let validator = ContextCompat::new(strategy);

        let err = validator.invoke(String::new(), None).unwrap_err();
        assert_eq!(err, "value must not be empty");
    }

    #[test]
    fn wrapped_strategy_is_reachable() {
        let validator = ContextCompat::new(observing_strategy());
        let out = validator
            .strategy()
            .validate("direct".to_string(), None)
            .unwrap();
        assert_eq!(out, "direct|");
    }
}
