use std::fmt;
use std::fmt::{Display, Formatter};

use crate::runtime::ds::value::JsValue;

/// A failure visible to the running JavaScript program.
///
/// Values of this type unwind through executable units until a `try`
/// statement converts them back into a JS value, or until they reach the
/// embedder. Internal engine invariant violations are not represented here;
/// those are compile-time [`CompileError`](crate::compiler::codegen::CompileError)s
/// or outright panics.
pub enum JsError {
    ReferenceError(String),
    TypeError(String),
    RangeError(String),
    /// A value raised by a `throw` statement, carried as-is.
    Thrown(JsValue),
}

impl JsError {
    /// The value a `catch` clause binds for this failure.
    ///
    /// User-thrown values come back untouched; engine-raised errors are
    /// bound as their message string.
    pub fn to_js_value(&self) -> JsValue {
        match self {
            JsError::ReferenceError(m) => JsValue::String(format!("ReferenceError: {}", m)),
            JsError::TypeError(m) => JsValue::String(format!("TypeError: {}", m)),
            JsError::RangeError(m) => JsValue::String(format!("RangeError: {}", m)),
            JsError::Thrown(v) => v.clone(),
        }
    }
}

impl Display for JsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            JsError::ReferenceError(m) => write!(f, "Uncaught reference error: {}.", m),
            JsError::TypeError(m) => write!(f, "Uncaught type error: {}.", m),
            JsError::RangeError(m) => write!(f, "Uncaught range error: {}.", m),
            JsError::Thrown(v) => write!(f, "Uncaught {}", v),
        }
    }
}

impl fmt::Debug for JsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
