//! The compilation half of the engine: the AST surface the embedder
//! builds trees with, and the walker that turns those trees into
//! executable units.

pub mod ast;
pub mod codegen;
#[cfg(test)]
mod unit_tests;
