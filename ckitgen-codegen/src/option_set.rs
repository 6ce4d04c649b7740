//! `OptionSet` conformance body.
//!
//! Produces the `RawValue` typealias, stored `rawValue` and memberwise
//! initializer that every CKit option set starts with. The body is indented
//! one level (four spaces) so it can be pasted directly inside the type's
//! braces. Neither input is validated.

use crate::builder::{CodeBuilder, Renderable};

/// Render an `OptionSet` body for the given access modifier and raw storage type.
///
/// ```
/// use ckitgen_codegen::option_set_body;
///
/// let body = option_set_body("public", "Int32");
/// assert!(body.contains("public init(rawValue: Int32) {"));
/// ```
pub fn option_set_body(access: &str, raw_value: &str) -> String {
    format!(
        "    {access} typealias RawValue = {raw_value}\n\
         \x20   {access} var rawValue: {raw_value}\n\
         \x20   {access} init(rawValue: {raw_value}) {{\n\
         \x20       self.rawValue = rawValue\n\
         \x20   }}\n",
        access = access,
        raw_value = raw_value,
    )
}

/// Owned form of [`option_set_body`], for use with a [`CodeBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSetBody {
    pub access: String,
    pub raw_value: String,
}

impl OptionSetBody {
    pub fn new(access: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            raw_value: raw_value.into(),
        }
    }
}

impl Renderable for OptionSetBody {
    fn emit(&self, builder: &mut CodeBuilder) {
        builder.push_raw(&option_set_body(&self.access, &self.raw_value));
    }
}
