use crate::runtime::ds::error::JsError;
use crate::runtime::ds::object::{new_array_ref, JsObject, JsObjectType, ObjectBase};
use crate::runtime::ds::operations::type_conversion::{
    canonical_numeric_index_string, to_number, to_string_int, to_unit_32,
};
use crate::runtime::ds::value::{JsNumberType, JsValue};

lazy_static! {
    pub static ref ARRAY_LENGTH_PROP: String = "length".to_string();
}

pub trait JsArrayObject: JsObject {
    fn as_super_trait(&self) -> &dyn JsObject;

    fn as_super_trait_mut(&mut self) -> &mut dyn JsObject;

    fn get_own_length(&self) -> u32 {
        if let Some(len) = self.get_own_property(&ARRAY_LENGTH_PROP) {
            if let JsValue::Number(JsNumberType::Integer(i)) = len {
                i as u32
            } else {
                panic!("Array length should have been an integer");
            }
        } else {
            panic!("Array length should have been set");
        }
    }
}

pub struct CoreArrayObject {
    base: ObjectBase,
}
impl CoreArrayObject {
    fn new(length: u32, proto: Option<JsObjectType>) -> Self {
        let mut obj = CoreArrayObject {
            base: ObjectBase::new_with_prototype(proto),
        };
        obj.base.insert(
            ARRAY_LENGTH_PROP.clone(),
            JsValue::Number(JsNumberType::Integer(length as i64)),
        );
        obj
    }
}
impl JsArrayObject for CoreArrayObject {
    fn as_super_trait(&self) -> &dyn JsObject {
        self
    }

    fn as_super_trait_mut(&mut self) -> &mut dyn JsObject {
        self
    }
}
impl JsObject for CoreArrayObject {
    fn get_object_base(&self) -> &ObjectBase {
        &self.base
    }

    fn get_object_base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }

    fn class_name(&self) -> &'static str {
        "Array"
    }

    fn set(&mut self, property: &str, value: JsValue) -> Result<(), JsError> {
        if property == ARRAY_LENGTH_PROP.as_str() {
            array_set_length(self, value)
        } else if let Some(idx) = canonical_numeric_index_string(property) {
            let old_length = self.get_own_length();
            self.base.insert(property.to_string(), value);
            if idx >= old_length {
                self.base.insert(
                    ARRAY_LENGTH_PROP.clone(),
                    JsValue::Number(JsNumberType::Integer((idx + 1) as i64)),
                );
            }
            Ok(())
        } else {
            self.base.insert(property.to_string(), value);
            Ok(())
        }
    }

    fn delete(&mut self, property: &str) -> bool {
        if property == ARRAY_LENGTH_PROP.as_str() {
            false
        } else {
            self.base.remove(property);
            true
        }
    }
}

pub fn array_set_length(array: &mut dyn JsArrayObject, value: JsValue) -> Result<(), JsError> {
    let new_length_in_js_number = to_number(&value);
    let new_length = to_unit_32(&new_length_in_js_number);
    if match &new_length_in_js_number {
        JsNumberType::Integer(i) => *i != new_length as i64,
        JsNumberType::Float(f) => *f != new_length as f64,
        JsNumberType::NaN => true,
        JsNumberType::PositiveInfinity => true,
        JsNumberType::NegativeInfinity => true,
    } {
        return Err(JsError::RangeError(new_length_in_js_number.to_string()));
    }

    let old_length = array.get_own_length();
    if new_length < old_length {
        for idx in new_length..old_length {
            array
                .get_object_base_mut()
                .remove(&to_string_int(idx as i64));
        }
    }
    array.get_object_base_mut().insert(
        ARRAY_LENGTH_PROP.clone(),
        JsValue::Number(JsNumberType::Integer(new_length as i64)),
    );
    Ok(())
}

pub fn array_create(length: u32, proto: Option<JsObjectType>) -> impl JsArrayObject {
    CoreArrayObject::new(length, proto)
}

/// Builds an array object holding `elements` at indexes `0..elements.len()`.
pub fn array_from_elements(
    elements: Vec<JsValue>,
    proto: Option<JsObjectType>,
) -> JsObjectType {
    let mut array = array_create(elements.len() as u32, proto);
    for (idx, value) in elements.into_iter().enumerate() {
        array
            .get_object_base_mut()
            .insert(to_string_int(idx as i64), value);
    }
    new_array_ref(Box::new(array))
}
