//! Host Migration
//!
//! This example simulates a host being upgraded across releases that hand
//! context to validators differently, while the wrapped validator stays
//! unchanged the whole way through.
//!
//! Key concepts:
//! - Driving one validator under both call conventions
//! - Structured document context, as serialization hosts supply it
//! - Trace output showing which context source resolved each call
//!
//! Run with: cargo run --example host_migration

use context_compat::{drive, CallConvention, ContextCompat, ValidationStrategy};
use serde_json::{json, Value};

/// Accepts a field value only if the surrounding document does not already
/// hold it.
struct UniqueWithinDocument;

impl ValidationStrategy for UniqueWithinDocument {
    type Value = String;
    type Context = Value;
    type Error = String;

    fn validate(&self, value: String, context: Option<&Value>) -> Result<String, String> {
        let Some(document) = context else {
            return Err("no document supplied".to_string());
        };
        if document["name"] == Value::String(value.clone()) {
            return Err(format!("name already holds {value:?}"));
        }
        Ok(value)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Host Migration Example ===\n");

    let mut validator = ContextCompat::new(UniqueWithinDocument);
    let document = json!({ "name": "taken", "id": 7 });

    // Release N: the host only knows the setter convention.
    let out = drive(
        &mut validator,
        CallConvention::Setter,
        "fresh".to_string(),
        document.clone(),
    );
    println!("setter convention:   {out:?}");

    // Release N+1: the host probes the capability flag and passes the
    // context as an argument. The validator did not change.
    let out = drive(
        &mut validator,
        CallConvention::Argument,
        "taken".to_string(),
        document,
    );
    println!("argument convention: {out:?}");

    println!("\n=== Example Complete ===");
}
