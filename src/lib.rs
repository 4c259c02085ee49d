//! # ferric - Embeddable JavaScript Engine Core in Rust
//!
//! The execution core of a JavaScript engine, without a parser in front of
//! it. Featuring:
//! - Programmatically built ASTs compiled into executable closures
//! - A dynamic scope chain with full `with` statement support
//! - Prototype-based objects, arrays and user/native functions
//! - Per-realm intrinsics and global object
//!
//! ## Quick Start
//!
//! ### Building and printing a tree
//!
//! ```
//! use ferric::compiler::ast::Node;
//!
//! let tree = Node::with(Node::identifier("env"), Node::identifier("x"));
//! print!("{}", tree.to_pretty_string());
//! ```
//!
//! ### Compiling and running a program
//!
//! ```
//! use ferric::compiler::ast::{BinaryOp, Node};
//! use ferric::compiler::codegen::compile;
//! use ferric::runtime::ds::execution_context::EvalContext;
//! use ferric::runtime::ds::value::{JsNumberType, JsValue};
//!
//! // var x = 2 + 3; x
//! let program = compile(&[
//!     Node::var(
//!         "x",
//!         Some(Node::binary(BinaryOp::Add, Node::number(2.0), Node::number(3.0))),
//!     ),
//!     Node::identifier("x"),
//! ])
//! .unwrap();
//!
//! let mut ctx = EvalContext::new();
//! let result = program.run(&mut ctx).unwrap();
//! assert_eq!(result, JsValue::Number(JsNumberType::Integer(5)));
//! ```
//!
//! A program is a slice of statement nodes; running it yields the value of
//! the last statement that produced one, REPL style.
//!
//! ## The Scope Chain
//!
//! The architectural center of this engine is its scope chain, built to
//! carry the most dynamic corner of the language: the `with` statement.
//!
//! ### How It Works
//!
//! 1. **Immutable records**: A scope is an immutable record pointing at its
//!    parent. Entering a `with` allocates a new record in front of the
//!    chain; nothing already on the chain is ever mutated.
//!
//! 2. **Object-backed resolution**: Every record is backed by a real
//!    object. Identifier lookup walks the records and asks each backing
//!    object whether it has the name, prototype chain included.
//!
//! 3. **Guaranteed restoration**: Leaving a `with` body swaps back the
//!    record captured at entry. That holds on every exit path, including
//!    a thrown error unwinding through the body.
//!
//! 4. **Implicit receivers**: Only `with` records make their target the
//!    `this` value for a call through a bare name. Names supplied by
//!    activation or catch records keep an undefined receiver.
//!
//! ### Example: writes through a `with` target
//!
//! ```
//! use ferric::compiler::ast::Node;
//! use ferric::compiler::codegen::compile;
//! use ferric::runtime::ds::execution_context::EvalContext;
//! use ferric::runtime::ds::value::JsValue;
//!
//! // var x = "global";
//! // var inner = { x: "inner" };
//! // with (inner) { x = "through the target"; }
//! // x
//! let program = compile(&[
//!     Node::var("x", Some(Node::string("global"))),
//!     Node::var("inner", Some(Node::object(vec![("x", Node::string("inner"))]))),
//!     Node::with(
//!         Node::identifier("inner"),
//!         Node::assign(Node::identifier("x"), Node::string("through the target")),
//!     ),
//!     Node::identifier("x"),
//! ])
//! .unwrap();
//!
//! let mut ctx = EvalContext::new();
//! // The write went to `inner.x`; the global `x` is untouched.
//! assert_eq!(
//!     program.run(&mut ctx).unwrap(),
//!     JsValue::String("global".to_string())
//! );
//! ```
//!
//! ## Architecture
//!
//! - **[`compiler`]** - AST surface and the walker that turns trees into
//!   executable units
//! - **[`runtime`]** - Realms, scopes, the object model and built-ins
//!   - **[`runtime::ds`]** - Data structures (values, objects, scopes,
//!     evaluation contexts)
//!   - **[`runtime::std_lib`]** - The built-in library installed into every
//!     fresh realm

#[macro_use]
extern crate lazy_static;

pub mod compiler;
pub mod runtime;
