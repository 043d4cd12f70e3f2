//! Code generation building blocks.
//!
//! Generators describe output as [`CodeFragment`] trees through the
//! [`Renderable`] trait; a [`CodeBuilder`] turns them into indented text.

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
