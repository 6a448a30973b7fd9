//! Basic Adapter
//!
//! This example demonstrates wrapping a closure-based validation strategy
//! so it works with hosts on either calling convention.
//!
//! Key concepts:
//! - Wrapping a closure with `FnStrategy`
//! - The legacy setter path and the modern argument path
//! - Same-call precedence: an argument wins over stored state
//!
//! Run with: cargo run --example basic_adapter

use context_compat::{ContextCompat, FnStrategy};

fn main() {
    println!("=== Basic Adapter Example ===\n");

    let strategy = FnStrategy::new(|value: String, context: Option<&String>| {
        if value.is_empty() {
            Err("value must not be empty".to_string())
        } else {
            match context {
                Some(ctx) => Ok(format!("{value} (validated for {ctx})")),
                None => Ok(value),
            }
        }
    });

    let mut validator = ContextCompat::new(strategy);
    println!("requires_context: {}", validator.requires_context());

    // Legacy hosts store the context before invoking.
    validator.set_context("user profile".to_string());
    println!(
        "legacy path:    {:?}",
        validator.invoke("alice".to_string(), None)
    );

    // Context-aware hosts pass it as an argument; it wins for that call.
    println!(
        "argument path:  {:?}",
        validator.invoke("bob".to_string(), Some(&"admin panel".to_string()))
    );

    // Strategy failures pass through the adapter unchanged.
    println!(
        "rejected:       {:?}",
        validator.invoke(String::new(), None)
    );

    println!("\n=== Example Complete ===");
}
