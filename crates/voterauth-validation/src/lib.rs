//! Voter Auth Validation Core
//!
//! Pure Rust validation functions compatible with both std and no_std environments.
//! Shared by the form controller model and the WASM client-side validation.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod email;
pub mod identity;
pub mod password;
pub mod string;

#[cfg(feature = "garde")]
pub mod garde_validators;

// Re-export all validators
pub use email::*;
pub use identity::*;
pub use password::*;
pub use string::*;

#[cfg(feature = "garde")]
pub use garde_validators::*;
