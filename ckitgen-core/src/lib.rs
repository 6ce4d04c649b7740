//! Core string helpers for CKit snippet generation.
//!
//! Everything in this crate is a pure string transformation: identifier
//! casing, the platform predicates spliced into `#if` directives, and the
//! accessor expressions used to reach raw memory behind a pointer-type tag.

mod platform;
mod pointer;
mod utils;

// Platform predicates
pub use platform::{BIT32, BIT64, BSD, DARWIN, FBSD, Platform};
// Pointer accessors
pub use pointer::{
    AccessorFlavor, PointerKind, const_raw_pointer, raw_o_pointer, raw_pointer,
};
// String utilities
pub use utils::{camel, capitalize};
