//! Primitive Codec
//!
//! Shared by both directions of the wire format.
//!
//! # Modules
//!
//! - `primitives`: scalar, identifier and Option reads/writes
//! - `amount`: checked narrowing of integer amounts to u64

pub mod amount;
pub mod primitives;

// Re-export all helpers for easy access
pub use amount::*;
pub use primitives::*;
