//! Express, Prisma and Zod generator for the crudgen workflow compiler.
//!
//! Given a [`ResolvedWorkflow`](crudgen_ir::ResolvedWorkflow), the
//! [`ExpressGenerator`] registers:
//!
//! - `prisma/schema.prisma` - one model per entity
//! - `src/lib/prisma.ts` - shared Prisma client
//! - `src/types/*.types.ts` - entity interfaces and input types
//! - `src/validators/*.validator.ts` - Zod schemas (entities with input only)
//! - `src/services/*.service.ts` - paginated CRUD over the Prisma client
//! - `src/controllers/*.controller.ts` - Express request handlers
//! - `src/routes/*.routes.ts` and `src/routes/index.ts` - routers
//!
//! ```ignore
//! use crudgen_codegen::compiler::Compiler;
//! use crudgen_codegen_express::ExpressGenerator;
//!
//! let project = Compiler::new(ExpressGenerator::new(), options).compile(&workflow)?;
//! ```

mod code_file;
mod generator;
mod naming;
mod type_mapper;

pub mod ast;
pub mod files;

pub use code_file::{CodeFile, GENERATED_HEADER, RawCode};
pub use generator::ExpressGenerator;
pub use naming::EntityNames;
pub use type_mapper::PrismaZodMapper;
