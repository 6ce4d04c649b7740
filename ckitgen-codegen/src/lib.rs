//! Swift snippet rendering for CKit bindings.
//!
//! # Module Organization
//!
//! - [`builder`] - Line-oriented code building with indentation
//! - [`option_set`] - `OptionSet` conformance body template
//! - [`conditional`] - `#if` / `#else` / `#endif` blocks over platform predicates
//! - [`license`] - License banner for generated files

pub mod builder;
pub mod conditional;
pub mod license;
pub mod option_set;

pub use builder::{CodeBuilder, Indent, Renderable};
pub use conditional::{ConditionalBlock, conditional_block};
pub use license::LicenseHeader;
pub use option_set::{OptionSetBody, option_set_body};
