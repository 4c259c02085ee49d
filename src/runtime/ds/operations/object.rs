use crate::runtime::ds::error::JsError;
use crate::runtime::ds::object::JsObjectType;
use crate::runtime::ds::value::JsValue;

pub fn get(o: &JsObjectType, p: &str) -> JsValue {
    (**o).borrow().as_js_object().get(p)
}

pub fn get_v(v: &JsValue, p: &str) -> Result<JsValue, JsError> {
    match v {
        JsValue::Object(o) => Ok(get(o, p)),
        _ => Err(JsError::TypeError(format!(
            "Cannot read property '{}' of {}",
            p, v
        ))),
    }
}

pub fn set_v(v: &JsValue, p: &str, value: JsValue) -> Result<(), JsError> {
    match v {
        JsValue::Object(o) => {
            let mut ot = (**o).borrow_mut();
            ot.as_js_object_mut().set(p, value)
        }
        _ => Err(JsError::TypeError(format!(
            "Cannot set property '{}' of {}",
            p, v
        ))),
    }
}

pub fn has_property(o: &JsObjectType, p: &str) -> bool {
    (**o).borrow().as_js_object().has_property(p)
}

/// Resolves `p` on `v` and checks the result is callable. A property that
/// resolves to undefined or null reads as "no method"; any other
/// non-callable result is a TypeError.
pub fn get_method(v: &JsValue, p: &str) -> Result<JsValue, JsError> {
    let f = get_v(v, p)?;
    match &f {
        JsValue::Undefined => Ok(JsValue::Undefined),
        JsValue::Null => Ok(JsValue::Undefined),
        JsValue::Object(o) => {
            if (**o).borrow().is_callable() {
                Ok(f)
            } else {
                Err(JsError::TypeError(format!("'{}' is not a function", p)))
            }
        }
        _ => Err(JsError::TypeError(format!("'{}' is not a function", p))),
    }
}

/// Installs `value` directly as an own entry, bypassing `set` overrides.
/// Used when wiring up intrinsics and globals.
pub fn define_own_property(o: &JsObjectType, p: &str, value: JsValue) {
    let mut ot = (**o).borrow_mut();
    ot.as_js_object_mut()
        .get_object_base_mut()
        .insert(p.to_string(), value);
}
