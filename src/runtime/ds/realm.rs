use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::runtime::ds::object::{object_create, JsObjectType};
use crate::runtime::ds::operations::object::define_own_property;
use crate::runtime::ds::scope::{Scope, ScopeRef};
use crate::runtime::ds::value::{JsNumberType, JsValue};
use crate::runtime::std_lib;

#[derive(Hash, PartialEq, Eq)]
pub enum WellKnownIntrinsics {
    ArrayPrototype,
    ObjectPrototype,
}

pub type JsRealmType = Rc<RefCell<Realm>>;

/// One independent global execution environment: the global object, the
/// intrinsic objects and the root scope targeting the global object.
pub struct Realm {
    pub intrinsics: FxHashMap<WellKnownIntrinsics, JsObjectType>,
    pub global_object: JsObjectType,
    pub global_scope: ScopeRef,
}
impl Realm {
    pub fn new() -> JsRealmType {
        let intrinsics = create_intrinsics();
        let global_object = object_create(Some(
            intrinsics
                .get(&WellKnownIntrinsics::ObjectPrototype)
                .unwrap()
                .clone(),
        ));
        let global_scope = Scope::global(global_object.clone());
        let realm = Rc::new(RefCell::new(Realm {
            intrinsics,
            global_object,
            global_scope,
        }));
        set_default_global_bindings(&realm);
        std_lib::install(&realm);
        realm
    }

    pub fn intrinsic(&self, int_name: &WellKnownIntrinsics) -> JsObjectType {
        self.intrinsics.get(int_name).unwrap().clone()
    }
}

pub fn create_intrinsics() -> FxHashMap<WellKnownIntrinsics, JsObjectType> {
    let mut intrinsics = FxHashMap::default();
    let object_prototype = object_create(None);
    let array_prototype = object_create(Some(object_prototype.clone()));
    intrinsics.insert(WellKnownIntrinsics::ObjectPrototype, object_prototype);
    intrinsics.insert(WellKnownIntrinsics::ArrayPrototype, array_prototype);
    intrinsics
}

pub fn set_default_global_bindings(realm: &JsRealmType) {
    // Take the handles first to avoid borrow conflicts.
    let (global_object, array_prototype) = {
        let r = (**realm).borrow();
        (
            r.global_object.clone(),
            r.intrinsic(&WellKnownIntrinsics::ArrayPrototype),
        )
    };
    define_own_property(&global_object, "undefined", JsValue::Undefined);
    define_own_property(&global_object, "NaN", JsValue::Number(JsNumberType::NaN));
    define_own_property(
        &global_object,
        "Infinity",
        JsValue::Number(JsNumberType::PositiveInfinity),
    );
    define_own_property(&global_object, "globalThis", JsValue::Object(global_object.clone()));

    // A constructor-less `Array` surface: just enough for code to reach
    // the prototype.
    let array = object_create(None);
    define_own_property(&array, "prototype", JsValue::Object(array_prototype));
    define_own_property(&global_object, "Array", JsValue::Object(array));
}
