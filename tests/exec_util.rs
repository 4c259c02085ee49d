//! Shared helpers for whole-program tests: compile a tree and run it in a
//! fresh realm.

extern crate ferric;

use ferric::compiler::ast::Node;
use ferric::compiler::codegen::compile;
use ferric::runtime::ds::error::JsError;
use ferric::runtime::ds::execution_context::EvalContext;
use ferric::runtime::ds::value::{JsNumberType, JsValue};

/// Compiles and runs a program in a fresh realm, returning whatever the
/// last value-producing statement evaluated to.
pub fn run_program(program: &[Node]) -> Result<JsValue, JsError> {
    let compiled = compile(program).expect("program should compile");
    let mut ctx = EvalContext::new();
    compiled.run(&mut ctx)
}

/// Like [`run_program`], but the program is expected to succeed.
pub fn run_ok(program: &[Node]) -> JsValue {
    run_program(program).expect("program should run without an error")
}

pub fn int(n: i64) -> JsValue {
    JsValue::Number(JsNumberType::Integer(n))
}

pub fn string(s: &str) -> JsValue {
    JsValue::String(s.to_string())
}
