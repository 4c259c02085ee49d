use crate::runtime::ds::object::ObjectType;
use crate::runtime::ds::value::{JsNumberType, JsValue};

pub const TYPE_STR_UNDEFINED: &str = "undefined";
pub const TYPE_STR_NULL: &str = "null";
pub const TYPE_STR_BOOLEAN: &str = "boolean";
pub const TYPE_STR_STRING: &str = "string";
pub const TYPE_STR_NUMBER: &str = "number";
pub const TYPE_STR_OBJECT: &str = "object";
pub const TYPE_STR_FUNCTION: &str = "function";

pub fn get_type(a: &JsValue) -> &'static str {
    match a {
        JsValue::Undefined => TYPE_STR_UNDEFINED,
        JsValue::Null => TYPE_STR_NULL,
        JsValue::Boolean(_) => TYPE_STR_BOOLEAN,
        JsValue::String(_) => TYPE_STR_STRING,
        JsValue::Number(_) => TYPE_STR_NUMBER,
        JsValue::Object(o) => match *(**o).borrow() {
            ObjectType::Ordinary(_) => TYPE_STR_OBJECT,
            ObjectType::Function(_) => TYPE_STR_FUNCTION,
            ObjectType::Array(_) => TYPE_STR_OBJECT,
        },
    }
}

/// The `typeof` operator's view of a value. Differs from [`get_type`] in
/// the one place the language does: `typeof null` is `"object"`.
pub fn type_of(a: &JsValue) -> &'static str {
    match a {
        JsValue::Null => TYPE_STR_OBJECT,
        _ => get_type(a),
    }
}

pub fn to_boolean(v: &JsValue) -> bool {
    match v {
        JsValue::Undefined => false,
        JsValue::Null => false,
        JsValue::Boolean(b) => *b,
        JsValue::String(s) => !s.is_empty(),
        JsValue::Number(n) => match n {
            JsNumberType::Integer(i) => *i != 0,
            JsNumberType::Float(f) => *f != 0.0 && !f.is_nan(),
            JsNumberType::NaN => false,
            JsNumberType::PositiveInfinity => true,
            JsNumberType::NegativeInfinity => true,
        },
        JsValue::Object(_) => true,
    }
}

pub fn to_number(v: &JsValue) -> JsNumberType {
    match v {
        JsValue::Undefined => JsNumberType::NaN,
        JsValue::Null => JsNumberType::Integer(0),
        JsValue::Boolean(b) => JsNumberType::Integer(match *b {
            true => 1,
            false => 0,
        }),
        JsValue::String(s) => string_to_number(s),
        JsValue::Number(n) => n.clone(),
        // Object-to-primitive coercion is out of scope; objects read as NaN.
        JsValue::Object(_) => JsNumberType::NaN,
    }
}

fn string_to_number(s: &str) -> JsNumberType {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return JsNumberType::Integer(0);
    }
    match trimmed {
        "Infinity" | "+Infinity" => return JsNumberType::PositiveInfinity,
        "-Infinity" => return JsNumberType::NegativeInfinity,
        _ => {}
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return JsNumberType::Integer(i);
    }
    match trimmed.parse::<f64>() {
        Ok(f) => from_f64(f),
        Err(_) => JsNumberType::NaN,
    }
}

/// JS string conversion. Unlike the `Display` rendering, a string value
/// converts to its own contents, unquoted.
pub fn to_js_string(v: &JsValue) -> String {
    match v {
        JsValue::String(s) => s.clone(),
        _ => v.to_string(),
    }
}

pub fn to_string_int(i: i64) -> String {
    i.to_string()
}

pub fn to_f64(n: &JsNumberType) -> f64 {
    match n {
        JsNumberType::Integer(i) => *i as f64,
        JsNumberType::Float(f) => *f,
        JsNumberType::NaN => f64::NAN,
        JsNumberType::PositiveInfinity => f64::INFINITY,
        JsNumberType::NegativeInfinity => f64::NEG_INFINITY,
    }
}

pub fn from_f64(f: f64) -> JsNumberType {
    if f.is_nan() {
        JsNumberType::NaN
    } else if f == f64::INFINITY {
        JsNumberType::PositiveInfinity
    } else if f == f64::NEG_INFINITY {
        JsNumberType::NegativeInfinity
    } else if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        JsNumberType::Integer(f as i64)
    } else {
        JsNumberType::Float(f)
    }
}

pub fn to_unit_32(n: &JsNumberType) -> u32 {
    match n {
        JsNumberType::Integer(i) => i.rem_euclid(1 << 32) as u32,
        JsNumberType::Float(f) => {
            if f.is_finite() {
                f.trunc().rem_euclid(4294967296.0) as u32
            } else {
                0
            }
        }
        JsNumberType::NaN => 0,
        JsNumberType::PositiveInfinity => 0,
        JsNumberType::NegativeInfinity => 0,
    }
}

/// `Some(i)` when `p` is the canonical decimal form of a valid array index.
pub fn canonical_numeric_index_string(p: &str) -> Option<u32> {
    match p.parse::<u32>() {
        Ok(i) => {
            if i != u32::MAX && i.to_string() == p {
                Some(i)
            } else {
                None
            }
        }
        Err(_) => None,
    }
}
