//! Conditional-compilation blocks over platform predicates.

use crate::builder::{CodeBuilder, Renderable};

/// An `#if` block with an optional `#else` branch.
///
/// Directives are written at the builder's current indentation and body
/// lines are re-indented to match, so a block can be emitted inside a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalBlock {
    predicate: String,
    body: String,
    otherwise: Option<String>,
}

impl ConditionalBlock {
    pub fn new(predicate: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            predicate: predicate.into(),
            body: body.into(),
            otherwise: None,
        }
    }

    /// Add an `#else` branch.
    pub fn otherwise(mut self, body: impl Into<String>) -> Self {
        self.otherwise = Some(body.into());
        self
    }
}

impl Renderable for ConditionalBlock {
    fn emit(&self, builder: &mut CodeBuilder) {
        builder.push_line(&format!("#if {}", self.predicate));
        builder.push_text(&self.body);
        if let Some(otherwise) = &self.otherwise {
            builder.push_line("#else");
            builder.push_text(otherwise);
        }
        builder.push_line("#endif");
    }
}

/// Wrap `body` in `#if <predicate>` / `#endif`.
pub fn conditional_block(predicate: &str, body: &str) -> String {
    ConditionalBlock::new(predicate, body).render()
}
