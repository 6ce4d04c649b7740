//! Trait for snippets that can be written into a [`CodeBuilder`].

use super::CodeBuilder;

/// A snippet that knows how to write itself at the builder's current indentation.
pub trait Renderable {
    /// Write this snippet into the builder.
    fn emit(&self, builder: &mut CodeBuilder);

    /// Render this snippet on its own, at indentation level zero.
    fn render(&self) -> String {
        let mut builder = CodeBuilder::swift();
        self.emit(&mut builder);
        builder.build()
    }
}
