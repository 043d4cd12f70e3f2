//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Organizes a file into a header comment, imports and body items, with a
//! blank line between sections and between body items.

use crudgen_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::Import;

/// Comment placed at the top of every generated source file.
pub const GENERATED_HEADER: &str = "// Generated by crudgen. Do not edit.";

/// A structured representation of a TypeScript (or Prisma) file.
///
/// # Example
///
/// ```ignore
/// let code = CodeFile::new()
///     .header(GENERATED_HEADER)
///     .import(Import::new("express").named("Router"))
///     .add(Const::new("userRouter", "Router()"))
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Option<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render with two-space indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TWO_SPACES)
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        let mut sections = 0;

        if let Some(header) = &self.header {
            builder.push_line(header);
            sections += 1;
        }

        if !self.imports.is_empty() {
            if sections > 0 {
                builder.push_blank();
            }
            for import in &self.imports {
                builder.emit(import);
            }
            sections += 1;
        }

        for fragments in &self.body {
            if sections > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
            sections += 1;
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.imports.is_empty() && self.body.is_empty()
    }
}

/// A raw code fragment that implements Renderable.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Create a raw code fragment from multiple lines.
    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(
            lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0.lines().map(CodeFragment::line).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file() {
        let file = CodeFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_sections_separated() {
        let file = CodeFile::new()
            .header(GENERATED_HEADER)
            .import(Import::new("express").named("Router"))
            .add(RawCode::new("const a = 1;"))
            .add(RawCode::new("const b = 2;"));

        assert_eq!(
            file.render(),
            "// Generated by crudgen. Do not edit.\n\nimport { Router } from \"express\";\n\nconst a = 1;\n\nconst b = 2;\n"
        );
    }

    #[test]
    fn test_raw_code_lines() {
        let file = CodeFile::new().add(RawCode::lines(["a", "b"]));
        assert_eq!(file.render(), "a\nb\n");
    }
}
