use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::runtime::ds::array_object::JsArrayObject;
use crate::runtime::ds::error::JsError;
use crate::runtime::ds::function_object::JsFunctionObject;
use crate::runtime::ds::operations::test_and_comparison::same_js_object;
use crate::runtime::ds::operations::type_conversion::canonical_numeric_index_string;
use crate::runtime::ds::value::JsValue;

pub type JsObjectType = Rc<RefCell<ObjectType>>;

/// Upper bound on prototype chain hops during property lookup.
pub const PROTOTYPE_CHAIN_LIMIT: usize = 1024;

pub enum ObjectType {
    Ordinary(Box<dyn JsObject>),
    Function(Box<dyn JsFunctionObject>),
    Array(Box<dyn JsArrayObject>),
}
impl PartialEq for ObjectType {
    fn eq(&self, other: &Self) -> bool {
        match self {
            ObjectType::Ordinary(o) => {
                if let ObjectType::Ordinary(o1) = other {
                    same_js_object(o.deref(), o1.deref())
                } else {
                    false
                }
            }
            ObjectType::Function(o) => {
                if let ObjectType::Function(o1) = other {
                    same_js_object(o.as_super_trait(), o1.as_super_trait())
                } else {
                    false
                }
            }
            ObjectType::Array(o) => {
                if let ObjectType::Array(o1) = other {
                    same_js_object(o.as_super_trait(), o1.as_super_trait())
                } else {
                    false
                }
            }
        }
    }
}
impl ObjectType {
    pub fn is_callable(&self) -> bool {
        match self {
            ObjectType::Function(_) => true,
            _ => false,
        }
    }

    pub fn is_array(&self) -> bool {
        match self {
            ObjectType::Array(_) => true,
            _ => false,
        }
    }

    pub fn as_js_object(&self) -> &dyn JsObject {
        match self {
            ObjectType::Ordinary(o) => o.deref(),
            ObjectType::Function(o) => o.as_super_trait(),
            ObjectType::Array(o) => o.as_super_trait(),
        }
    }

    pub fn as_js_object_mut(&mut self) -> &mut dyn JsObject {
        match self {
            ObjectType::Ordinary(o) => o.as_mut(),
            ObjectType::Function(o) => o.as_super_trait_mut(),
            ObjectType::Array(o) => o.as_super_trait_mut(),
        }
    }
}

pub struct ObjectBase {
    properties: FxHashMap<String, JsValue>,
    key_order: Vec<String>,
    pub(crate) prototype: Option<JsObjectType>,
}
impl ObjectBase {
    pub fn new() -> Self {
        ObjectBase {
            properties: FxHashMap::default(),
            key_order: Vec::new(),
            prototype: None,
        }
    }

    pub fn new_with_prototype(prototype: Option<JsObjectType>) -> Self {
        ObjectBase {
            properties: FxHashMap::default(),
            key_order: Vec::new(),
            prototype,
        }
    }

    /// Stores an own entry. A new key joins the back of the enumeration
    /// order; overwriting keeps the key at its original position.
    pub fn insert(&mut self, property: String, value: JsValue) {
        if !self.properties.contains_key(&property) {
            self.key_order.push(property.clone());
        }
        self.properties.insert(property, value);
    }

    /// Drops an own entry and its place in the enumeration order, so a
    /// removed key re-enters at the back if it is ever stored again.
    pub fn remove(&mut self, property: &str) {
        if self.properties.remove(property).is_some() {
            self.key_order.retain(|k| k != property);
        }
    }

    pub fn get(&self, property: &str) -> Option<&JsValue> {
        self.properties.get(property)
    }

    pub fn contains_key(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    /// Own keys, oldest first.
    pub fn own_keys(&self) -> &[String] {
        &self.key_order
    }
}

pub trait JsObject {
    fn get_object_base(&self) -> &ObjectBase;

    fn get_object_base_mut(&mut self) -> &mut ObjectBase;

    fn class_name(&self) -> &'static str {
        "Object"
    }

    fn get_prototype_of(&self) -> Option<JsObjectType> {
        match &self.get_object_base().prototype {
            None => None,
            Some(p) => Some(p.clone()),
        }
    }

    fn set_prototype_of(&mut self, prototype: Option<JsObjectType>) -> bool {
        if let Some(new_proto) = &prototype {
            // To prevent circular chains: walk the candidate's chain and
            // refuse if it leads back to this object. The cell being
            // mutated cannot be borrowed again, so a failed borrow is the
            // same signal as an identity match.
            let mut p = Some(new_proto.clone());
            let mut hops = 0;
            while let Some(some_p) = p {
                if hops >= PROTOTYPE_CHAIN_LIMIT {
                    return false;
                }
                match some_p.deref().try_borrow() {
                    Err(_) => return false,
                    Ok(o) => {
                        if same_js_object(&*self, o.as_js_object()) {
                            return false;
                        }
                        p = o.as_js_object().get_prototype_of();
                    }
                }
                hops += 1;
            }
        }
        self.get_object_base_mut().prototype = prototype;
        true
    }

    fn get_own_property(&self, property: &str) -> Option<JsValue> {
        self.get_object_base().get(property).cloned()
    }

    fn has_own_property(&self, property: &str) -> bool {
        self.get_object_base().contains_key(property)
    }

    fn has_property(&self, property: &str) -> bool {
        if self.has_own_property(property) {
            return true;
        }
        let mut proto = self.get_prototype_of();
        let mut hops = 0;
        while let Some(p) = proto {
            if hops >= PROTOTYPE_CHAIN_LIMIT {
                break;
            }
            let o = (*p).borrow();
            if o.as_js_object().has_own_property(property) {
                return true;
            }
            proto = o.as_js_object().get_prototype_of();
            hops += 1;
        }
        false
    }

    fn get(&self, property: &str) -> JsValue {
        if let Some(v) = self.get_own_property(property) {
            return v;
        }
        let mut proto = self.get_prototype_of();
        let mut hops = 0;
        while let Some(p) = proto {
            if hops >= PROTOTYPE_CHAIN_LIMIT {
                break;
            }
            let o = (*p).borrow();
            if let Some(v) = o.as_js_object().get_own_property(property) {
                return v;
            }
            proto = o.as_js_object().get_prototype_of();
            hops += 1;
        }
        JsValue::Undefined
    }

    fn set(&mut self, property: &str, value: JsValue) -> Result<(), JsError> {
        self.get_object_base_mut()
            .insert(property.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, property: &str) -> bool {
        self.get_object_base_mut().remove(property);
        true
    }

    /// Canonical index keys in numeric order, then the remaining keys in
    /// insertion order.
    fn own_property_keys(&self) -> Vec<String> {
        let mut index_keys = vec![];
        let mut str_keys = vec![];
        for key in self.get_object_base().own_keys() {
            match canonical_numeric_index_string(key) {
                Some(i) => index_keys.push(i),
                None => str_keys.push(key.clone()),
            }
        }
        index_keys.sort_unstable();

        let mut result: Vec<String> = index_keys.into_iter().map(|i| i.to_string()).collect();
        result.append(&mut str_keys);
        result
    }

    fn to_string(&self) -> String {
        format!("[object {}]", self.class_name())
    }
}

pub struct CoreObject {
    base: ObjectBase,
}
impl CoreObject {
    pub fn new() -> Self {
        CoreObject {
            base: ObjectBase::new(),
        }
    }
}
impl JsObject for CoreObject {
    fn get_object_base(&self) -> &ObjectBase {
        &self.base
    }

    fn get_object_base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }
}

/// Creates an empty ordinary object whose prototype is `prototype`.
pub fn object_create(prototype: Option<JsObjectType>) -> JsObjectType {
    let mut o = CoreObject::new();
    o.base.prototype = prototype;
    new_object_ref(Box::new(o))
}

pub fn new_object_ref(o: Box<dyn JsObject>) -> JsObjectType {
    Rc::new(RefCell::new(ObjectType::Ordinary(o)))
}

pub fn new_function_ref(o: Box<dyn JsFunctionObject>) -> JsObjectType {
    Rc::new(RefCell::new(ObjectType::Function(o)))
}

pub fn new_array_ref(o: Box<dyn JsArrayObject>) -> JsObjectType {
    Rc::new(RefCell::new(ObjectType::Array(o)))
}
