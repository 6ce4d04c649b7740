//! Code builder utility for generating properly indented code.

use super::{Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`).
///
/// # Example (Consuming API)
///
/// ```
/// use ckitgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::swift()
///     .line("public struct Flags: OptionSet {")
///     .indent()
///     .line("public var rawValue: Int32")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "public struct Flags: OptionSet {\n    public var rawValue: Int32\n}\n");
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use ckitgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::swift();
/// builder
///     .push_line("#if os(Linux)")
///     .push_line("import Glibc")
///     .push_line("#endif");
/// let code = builder.build();
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (Swift default).
    pub fn swift() -> Self {
        Self::new(Indent::SWIFT)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline (mutable).
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Add every line of `text` at the current indentation (mutable).
    ///
    /// Line contents are kept as given, including `\r` and whitespace-only
    /// lines. Empty lines get no indent. A missing final newline is added.
    pub fn push_text(&mut self, text: &str) -> &mut Self {
        for line in text.split_inclusive('\n') {
            let content = line.strip_suffix('\n').unwrap_or(line);
            if !content.is_empty() {
                self.write_indent();
            }
            self.buffer.push_str(content);
            self.buffer.push('\n');
        }
        self
    }

    /// Add a `//` comment line; an empty `text` yields a bare `//` (mutable).
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            self.push_line("//")
        } else {
            self.push_line(&format!("//  {}", text))
        }
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable snippet (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        node.emit(self);
        self
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Add multi-line text at the current indentation.
    pub fn text(mut self, text: &str) -> Self {
        self.push_text(text);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::swift()
    }
}
