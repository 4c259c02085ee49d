use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::compiler::codegen::{Completion, FunctionCode};
use crate::runtime::ds::error::JsError;
use crate::runtime::ds::execution_context::EvalContext;
use crate::runtime::ds::object::{
    object_create, JsObject, JsObjectType, ObjectBase, ObjectType,
};
use crate::runtime::ds::realm::{JsRealmType, Realm, WellKnownIntrinsics};
use crate::runtime::ds::scope::{Scope, ScopeRef};
use crate::runtime::ds::value::JsValue;

/// Function signature for built-in methods. Native functions receive the
/// realm they were registered against, the `this` value and the call
/// arguments.
pub type NativeFn =
    fn(context: &JsRealmType, this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JsError>;

pub struct FunctionObjectBase {
    pub name: String,
    pub object_base: ObjectBase,
}
impl FunctionObjectBase {
    pub fn new(name: String, proto: Option<JsObjectType>) -> Self {
        FunctionObjectBase {
            name,
            object_base: ObjectBase::new_with_prototype(proto),
        }
    }

    pub fn get_object_base(&self) -> &ObjectBase {
        &self.object_base
    }

    pub fn get_object_base_mut(&mut self) -> &mut ObjectBase {
        &mut self.object_base
    }
}

pub trait JsFunctionObject: JsObject {
    fn as_super_trait(&self) -> &dyn JsObject;

    fn as_super_trait_mut(&mut self) -> &mut dyn JsObject;

    fn get_function_object_base(&self) -> &FunctionObjectBase;

    fn get_function_object_base_mut(&mut self) -> &mut FunctionObjectBase;

    fn function_name(&self) -> &str {
        &self.get_function_object_base().name
    }

    fn call_target(&self) -> CallTarget;
}

/// Everything needed to run a call once the callee's cell has been
/// released. Holding owned handles here keeps re-entrant calls away from
/// an outstanding borrow.
pub enum CallTarget {
    Native {
        context: JsRealmType,
        func: NativeFn,
    },
    User {
        code: Rc<FunctionCode>,
        environment: ScopeRef,
        realm: JsRealmType,
    },
}

pub struct NativeFunctionObject {
    base: FunctionObjectBase,
    context: Weak<RefCell<Realm>>,
    func: NativeFn,
}
impl NativeFunctionObject {
    pub fn new(context: &JsRealmType, name: &str, func: NativeFn) -> Self {
        let proto = (**context)
            .borrow()
            .intrinsic(&WellKnownIntrinsics::ObjectPrototype);
        NativeFunctionObject {
            base: FunctionObjectBase::new(name.to_string(), Some(proto)),
            context: Rc::downgrade(context),
            func,
        }
    }

    pub fn context(&self) -> JsRealmType {
        match self.context.upgrade() {
            Some(realm) => realm,
            None => panic!("Realm backing function '{}' has been dropped", self.base.name),
        }
    }
}
impl JsObject for NativeFunctionObject {
    fn get_object_base(&self) -> &ObjectBase {
        self.base.get_object_base()
    }

    fn get_object_base_mut(&mut self) -> &mut ObjectBase {
        self.base.get_object_base_mut()
    }

    fn class_name(&self) -> &'static str {
        "Function"
    }

    fn to_string(&self) -> String {
        format!("function {}() {{ [native code] }}", self.base.name)
    }
}
impl JsFunctionObject for NativeFunctionObject {
    fn as_super_trait(&self) -> &dyn JsObject {
        self
    }

    fn as_super_trait_mut(&mut self) -> &mut dyn JsObject {
        self
    }

    fn get_function_object_base(&self) -> &FunctionObjectBase {
        &self.base
    }

    fn get_function_object_base_mut(&mut self) -> &mut FunctionObjectBase {
        &mut self.base
    }

    fn call_target(&self) -> CallTarget {
        CallTarget::Native {
            context: self.context(),
            func: self.func,
        }
    }
}

pub struct UserFunctionObject {
    base: FunctionObjectBase,
    code: Rc<FunctionCode>,
    environment: ScopeRef,
    realm: Weak<RefCell<Realm>>,
}
impl UserFunctionObject {
    pub fn new(realm: &JsRealmType, code: Rc<FunctionCode>, environment: ScopeRef) -> Self {
        let proto = (**realm)
            .borrow()
            .intrinsic(&WellKnownIntrinsics::ObjectPrototype);
        UserFunctionObject {
            base: FunctionObjectBase::new(code.name.clone(), Some(proto)),
            code,
            environment,
            realm: Rc::downgrade(realm),
        }
    }

    pub fn realm(&self) -> JsRealmType {
        match self.realm.upgrade() {
            Some(realm) => realm,
            None => panic!("Realm backing function '{}' has been dropped", self.base.name),
        }
    }
}
impl JsObject for UserFunctionObject {
    fn get_object_base(&self) -> &ObjectBase {
        self.base.get_object_base()
    }

    fn get_object_base_mut(&mut self) -> &mut ObjectBase {
        self.base.get_object_base_mut()
    }

    fn class_name(&self) -> &'static str {
        "Function"
    }

    fn to_string(&self) -> String {
        format!(
            "function {}({}) {{ [code] }}",
            self.base.name,
            self.code.params.join(",")
        )
    }
}
impl JsFunctionObject for UserFunctionObject {
    fn as_super_trait(&self) -> &dyn JsObject {
        self
    }

    fn as_super_trait_mut(&mut self) -> &mut dyn JsObject {
        self
    }

    fn get_function_object_base(&self) -> &FunctionObjectBase {
        &self.base
    }

    fn get_function_object_base_mut(&mut self) -> &mut FunctionObjectBase {
        &mut self.base
    }

    fn call_target(&self) -> CallTarget {
        CallTarget::User {
            code: self.code.clone(),
            environment: self.environment.clone(),
            realm: self.realm(),
        }
    }
}

/// Invokes `f` with the given `this` value and arguments. The callee's
/// cell is only held long enough to extract a [`CallTarget`].
pub fn call_function(
    f: &JsObjectType,
    this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JsError> {
    let target = {
        let o = (**f).borrow();
        match &*o {
            ObjectType::Function(fo) => fo.call_target(),
            _ => {
                return Err(JsError::TypeError(format!(
                    "{} is not a function",
                    o.as_js_object().to_string()
                )))
            }
        }
    };
    match target {
        CallTarget::Native { context, func } => func(&context, this, args),
        CallTarget::User {
            code,
            environment,
            realm,
        } => run_function_code(&code, &environment, &realm, this, args),
    }
}

/// Establishes the activation record for a user function call and runs its
/// body. Parameters land on a prototype-less activation object, followed
/// by the hoisted `var` names that do not collide with a parameter.
pub fn run_function_code(
    code: &Rc<FunctionCode>,
    environment: &ScopeRef,
    realm: &JsRealmType,
    this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JsError> {
    let activation = object_create(None);
    {
        let mut o = (*activation).borrow_mut();
        let obj = o.as_js_object_mut();
        for (idx, param) in code.params.iter().enumerate() {
            let value = args.get(idx).cloned().unwrap_or(JsValue::Undefined);
            obj.set(param, value)?;
        }
        for var_name in &code.var_declarations {
            if !obj.has_own_property(var_name) {
                obj.set(var_name, JsValue::Undefined)?;
            }
        }
    }
    let scope = Scope::activation(activation, Some(environment.clone()));
    let mut ctx = EvalContext::for_function_call(realm.clone(), scope, this);
    match (code.body)(&mut ctx)? {
        Completion::Return(v) => Ok(v),
        Completion::Normal(_) => Ok(JsValue::Undefined),
        Completion::Break | Completion::Continue => {
            unreachable!("break or continue escaped a function body")
        }
    }
}
