//! Array built-in methods.
//!
//! The language defines `toString` and `toLocaleString` in terms of the
//! user-replaceable `join`, so both re-resolve `"join"` on the receiver at
//! every call instead of caching it at install time. Overriding `join` on
//! an array (or on `Array.prototype`) redirects them.

use crate::runtime::ds::error::JsError;
use crate::runtime::ds::function_object::{call_function, NativeFn, NativeFunctionObject};
use crate::runtime::ds::object::{new_function_ref, JsObjectType};
use crate::runtime::ds::operations::object::{define_own_property, get, get_method};
use crate::runtime::ds::operations::type_conversion::{
    to_js_string, to_number, to_string_int, to_unit_32,
};
use crate::runtime::ds::realm::{JsRealmType, WellKnownIntrinsics};
use crate::runtime::ds::value::{JsNumberType, JsValue};

/// Installs the method set on the realm's `Array.prototype`.
pub fn install(realm: &JsRealmType) {
    let array_prototype = (**realm)
        .borrow()
        .intrinsic(&WellKnownIntrinsics::ArrayPrototype);
    add_method(realm, &array_prototype, "join", array_join);
    add_method(realm, &array_prototype, "toString", array_to_string);
    add_method(realm, &array_prototype, "toLocaleString", array_to_locale_string);
    add_method(realm, &array_prototype, "push", array_push);
}

fn add_method(realm: &JsRealmType, target: &JsObjectType, name: &str, func: NativeFn) {
    let f = NativeFunctionObject::new(realm, name, func);
    define_own_property(target, name, JsValue::Object(new_function_ref(Box::new(f))));
}

fn expect_array(this: &JsValue, method: &str) -> Result<JsObjectType, JsError> {
    if let Some(o) = this.as_object() {
        if (**o).borrow().is_array() {
            return Ok(o.clone());
        }
    }
    Err(JsError::TypeError(format!(
        "Array.prototype.{} called on a non-array",
        method
    )))
}

/// Array.prototype.join
fn array_join(
    _context: &JsRealmType,
    this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JsError> {
    let o = expect_array(&this, "join")?;
    let separator = match args.get(0) {
        Some(v) if !v.is_undefined() => to_js_string(v),
        _ => ",".to_string(),
    };
    let length = to_unit_32(&to_number(&get(&o, "length")));
    let mut result = String::new();
    for idx in 0..length {
        if idx > 0 {
            result.push_str(&separator);
        }
        match get(&o, &to_string_int(idx as i64)) {
            JsValue::Undefined | JsValue::Null => {}
            v => result.push_str(&to_js_string(&v)),
        }
    }
    Ok(JsValue::String(result))
}

/// Array.prototype.toString
fn array_to_string(
    _context: &JsRealmType,
    this: JsValue,
    _args: Vec<JsValue>,
) -> Result<JsValue, JsError> {
    expect_array(&this, "toString")?;
    match get_method(&this, "join")? {
        JsValue::Object(f) => call_function(&f, this, Vec::new()),
        _ => Err(JsError::TypeError("'join' is not a function".to_string())),
    }
}

/// Array.prototype.toLocaleString
fn array_to_locale_string(
    _context: &JsRealmType,
    this: JsValue,
    _args: Vec<JsValue>,
) -> Result<JsValue, JsError> {
    expect_array(&this, "toLocaleString")?;
    match get_method(&this, "join")? {
        JsValue::Object(f) => call_function(&f, this, Vec::new()),
        _ => Err(JsError::TypeError("'join' is not a function".to_string())),
    }
}

/// Array.prototype.push
fn array_push(
    _context: &JsRealmType,
    this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JsError> {
    let o = expect_array(&this, "push")?;
    let mut length = to_unit_32(&to_number(&get(&o, "length")));
    {
        let mut ot = (*o).borrow_mut();
        let obj = ot.as_js_object_mut();
        for value in args {
            obj.set(&to_string_int(length as i64), value)?;
            length = match length.checked_add(1) {
                Some(next) => next,
                None => {
                    // The grown length no longer fits the u32 length range.
                    return Err(JsError::RangeError((length as u64 + 1).to_string()));
                }
            };
        }
    }
    Ok(JsValue::Number(JsNumberType::Integer(length as i64)))
}
