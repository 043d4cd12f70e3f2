//! `const` and `type` declaration builders.

use crudgen_codegen::builder::{CodeFragment, Renderable};

/// Builder for TypeScript const declarations.
///
/// Multi-line values are emitted as-is after the first line, so the value
/// carries its own indentation.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
    ty: Option<String>,
    exported: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ty: None,
            exported: true,
        }
    }

    /// Add a type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Make this const private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let annotation = self
            .ty
            .as_ref()
            .map(|ty| format!(": {}", ty))
            .unwrap_or_default();

        let mut lines = self.value.lines();
        let first = lines.next().unwrap_or("");
        let rest: Vec<&str> = lines.collect();
        let head = format!("{}const {}{} = {}", export, self.name, annotation, first);

        if rest.is_empty() {
            return vec![CodeFragment::line(format!("{};", head))];
        }

        let mut fragments = vec![CodeFragment::line(head)];
        let last = rest.len() - 1;
        for (i, line) in rest.into_iter().enumerate() {
            let line = if i == last {
                format!("{};", line)
            } else {
                line.to_string()
            };
            fragments.push(CodeFragment::line(line));
        }
        fragments
    }
}

/// Builder for `type Name = ...;` aliases.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    ty: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "export type {} = {};",
            self.name, self.ty
        ))]
    }
}
