use crate::runtime::ds::object::JsObjectType;
use crate::runtime::ds::realm::{JsRealmType, Realm};
use crate::runtime::ds::scope::ScopeRef;
use crate::runtime::ds::value::JsValue;

/// The mutable state an executable unit runs against: the realm, the
/// currently active scope and the `this` binding. `with` units swap the
/// scope in and out; function calls build a fresh context of their own.
pub struct EvalContext {
    realm: JsRealmType,
    scope: ScopeRef,
    this_value: JsValue,
}
impl EvalContext {
    /// Boots a fresh realm and positions the context at its root scope.
    /// At the top level `this` is the global object.
    pub fn new() -> Self {
        let realm = Realm::new();
        let (scope, this_value) = {
            let r = (*realm).borrow();
            (r.global_scope.clone(), JsValue::Object(r.global_object.clone()))
        };
        EvalContext {
            realm,
            scope,
            this_value,
        }
    }

    pub fn for_function_call(realm: JsRealmType, scope: ScopeRef, this_value: JsValue) -> Self {
        EvalContext {
            realm,
            scope,
            this_value,
        }
    }

    pub fn realm(&self) -> &JsRealmType {
        &self.realm
    }

    pub fn scope(&self) -> &ScopeRef {
        &self.scope
    }

    pub fn set_scope(&mut self, scope: ScopeRef) {
        self.scope = scope;
    }

    pub fn this_value(&self) -> &JsValue {
        &self.this_value
    }

    pub fn global_object(&self) -> JsObjectType {
        (*self.realm).borrow().global_object.clone()
    }
}
impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}
