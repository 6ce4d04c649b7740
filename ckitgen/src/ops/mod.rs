//! Core operations.
//!
//! This module contains the logic behind the table-producing commands,
//! separated from CLI argument parsing and output rendering.

pub mod platform;
pub mod pointer;

pub use platform::platforms;
pub use pointer::pointers;
