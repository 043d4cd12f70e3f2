//! TypeScript import builder.

use crudgen_codegen::builder::{CodeFragment, Renderable};

/// Builder for TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    namespace: Option<String>,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            namespace: None,
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import the whole module (`import * as name`).
    pub fn namespace(mut self, name: impl Into<String>) -> Self {
        self.namespace = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    fn statement(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };

        if let Some(ns) = &self.namespace {
            return format!("import {}* as {} from \"{}\";", type_kw, ns, self.from);
        }

        match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {}{} from \"{}\";", type_kw, def, self.from),
            (Some(def), false) => format!(
                "import {}{}, {{ {} }} from \"{}\";",
                type_kw,
                def,
                self.named.join(", "),
                self.from
            ),
            (None, false) => format!(
                "import {}{{ {} }} from \"{}\";",
                type_kw,
                self.named.join(", "),
                self.from
            ),
            (None, true) => format!("import \"{}\";", self.from),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use crudgen_codegen::builder::CodeBuilder;

    use super::*;

    fn build(import: &Import) -> String {
        CodeBuilder::default().render(import).build()
    }

    #[test]
    fn test_named_import() {
        let i = Import::new("express").named("Router");
        assert_eq!(build(&i), "import { Router } from \"express\";\n");
    }

    #[test]
    fn test_type_only_import() {
        let i = Import::new("express")
            .named("Request")
            .named("Response")
            .type_only();
        assert_eq!(build(&i), "import type { Request, Response } from \"express\";\n");
    }

    #[test]
    fn test_namespace_import() {
        let i = Import::new("../services/user.service").namespace("userService");
        assert_eq!(
            build(&i),
            "import * as userService from \"../services/user.service\";\n"
        );
    }

    #[test]
    fn test_default_import() {
        let i = Import::new("cors").default("cors");
        assert_eq!(build(&i), "import cors from \"cors\";\n");
    }

    #[test]
    fn test_side_effect_import() {
        assert_eq!(build(&Import::new("dotenv/config")), "import \"dotenv/config\";\n");
    }
}
