use std::ptr;
use std::rc::Rc;

use crate::runtime::ds::object::{JsObject, ObjectBase, ObjectType};
use crate::runtime::ds::operations::type_conversion::{to_f64, to_number};
use crate::runtime::ds::value::{JsNumberType, JsValue};

pub fn same_object(a: &ObjectType, b: &ObjectType) -> bool {
    a == b
}

pub fn same_js_object<A: JsObject + ?Sized, B: JsObject + ?Sized>(a: &A, b: &B) -> bool {
    ptr::eq(
        a.get_object_base() as *const ObjectBase,
        b.get_object_base() as *const ObjectBase,
    )
}

fn number_equals(a: &JsNumberType, b: &JsNumberType) -> bool {
    match (a, b) {
        (JsNumberType::NaN, _) | (_, JsNumberType::NaN) => false,
        _ => to_f64(a) == to_f64(b),
    }
}

pub fn strict_equals(a: &JsValue, b: &JsValue) -> bool {
    match (a, b) {
        (JsValue::Undefined, JsValue::Undefined) => true,
        (JsValue::Null, JsValue::Null) => true,
        (JsValue::Boolean(x), JsValue::Boolean(y)) => x == y,
        (JsValue::String(x), JsValue::String(y)) => x == y,
        (JsValue::Number(x), JsValue::Number(y)) => number_equals(x, y),
        (JsValue::Object(x), JsValue::Object(y)) => Rc::ptr_eq(x, y),
        _ => false,
    }
}

/// Loose (`==`) equality. Objects never coerce to primitives here, so an
/// object only loosely equals the same object.
pub fn loose_equals(a: &JsValue, b: &JsValue) -> bool {
    match (a, b) {
        (JsValue::Undefined, JsValue::Null) | (JsValue::Null, JsValue::Undefined) => true,
        (JsValue::Boolean(_), _) => loose_equals(&JsValue::Number(to_number(a)), b),
        (_, JsValue::Boolean(_)) => loose_equals(a, &JsValue::Number(to_number(b))),
        (JsValue::Number(x), JsValue::String(_)) => number_equals(x, &to_number(b)),
        (JsValue::String(_), JsValue::Number(y)) => number_equals(&to_number(a), y),
        _ => strict_equals(a, b),
    }
}

/// The abstract relational comparison: `None` when either side reads as
/// NaN, in which case every relation is false.
pub fn less_than(a: &JsValue, b: &JsValue) -> Option<bool> {
    if let (JsValue::String(x), JsValue::String(y)) = (a, b) {
        return Some(x < y);
    }
    let x = to_f64(&to_number(a));
    let y = to_f64(&to_number(b));
    if x.is_nan() || y.is_nan() {
        None
    } else {
        Some(x < y)
    }
}
