//! src/lib/prisma.ts generator.

use std::path::PathBuf;

use crudgen_codegen::builder::CodeFragment;
use crudgen_core::GeneratedFile;

use crate::{
    ast::{Const, Import},
    code_file::{CodeFile, GENERATED_HEADER},
};

/// Shared Prisma client, reused across hot reloads outside production.
pub struct PrismaClientTs;

impl GeneratedFile for PrismaClientTs {
    fn path(&self) -> PathBuf {
        PathBuf::from("src").join("lib").join("prisma.ts")
    }

    fn render(&self) -> String {
        CodeFile::new()
            .header(GENERATED_HEADER)
            .import(Import::new("@prisma/client").named("PrismaClient"))
            .add(
                Const::new(
                    "globalForPrisma",
                    "globalThis as unknown as { prisma?: PrismaClient }",
                )
                .private(),
            )
            .add(Const::new(
                "prisma",
                "globalForPrisma.prisma ?? new PrismaClient()",
            ))
            .add(CodeFragment::block(
                "if (process.env.NODE_ENV !== \"production\") {",
                vec![CodeFragment::line("globalForPrisma.prisma = prisma;")],
                "}",
            ))
            .render()
    }
}
