//! The compatibility adapter and its delegate seam.
//!
//! This module contains the two halves of the bridge:
//! - Strategy definitions via the `ValidationStrategy` trait
//! - The `ContextCompat` wrapper that accepts context through either
//!   calling convention and hands the wrapped strategy one consistent value

mod compat;
mod strategy;

pub use compat::ContextCompat;
pub use strategy::{FnStrategy, ValidationStrategy};
