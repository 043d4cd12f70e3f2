//! TypeScript syntax builders used by the file generators.
//!
//! Each builder implements [`Renderable`](crudgen_codegen::builder::Renderable)
//! and is assembled into files through [`CodeFile`](crate::CodeFile).

mod consts;
mod fns;
mod imports;
mod interface;

pub use consts::{Const, TypeAlias};
pub use fns::{Fn, Param};
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
