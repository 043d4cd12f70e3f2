//! Indented text buffer that renders [`CodeFragment`]s.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated source, tracking the current indent level.
///
/// # Example
///
/// ```
/// use crudgen_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let model = CodeFragment::block(
///     "model User {",
///     vec![CodeFragment::line("id String @id @default(uuid())")],
///     "}",
/// );
/// let code = CodeBuilder::default().render(&model).build();
///
/// assert_eq!(code, "model User {\n  id String @id @default(uuid())\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Write one line at the current indent level.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Blank lines are never indented.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn emit(&mut self, node: &(impl Renderable + ?Sized)) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.indent_level += 1;
                for f in body {
                    self.apply_fragment(f);
                }
                self.indent_level -= 1;
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::DocComment(text) => {
                self.push_line(&format!("/** {} */", text));
            }
        }
    }

    /// Consuming variant of [`CodeBuilder::emit`] for one-shot rendering.
    pub fn render(mut self, node: &(impl Renderable + ?Sized)) -> Self {
        self.emit(node);
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}
