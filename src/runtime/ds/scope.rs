use std::rc::Rc;

use crate::runtime::ds::error::JsError;
use crate::runtime::ds::object::JsObjectType;
use crate::runtime::ds::operations::object::{get, has_property};
use crate::runtime::ds::value::JsValue;

pub type ScopeRef = Rc<Scope>;

pub enum ScopeKind {
    Global,
    With,
    Activation,
    Catch,
}

/// One record of the scope chain. Records are immutable once built, so
/// entering and leaving a `with` block is a pointer swap on the evaluation
/// context, never a mutation of existing records.
pub struct Scope {
    kind: ScopeKind,
    target: JsObjectType,
    parent: Option<ScopeRef>,
}
impl Scope {
    pub fn global(target: JsObjectType) -> ScopeRef {
        Rc::new(Scope {
            kind: ScopeKind::Global,
            target,
            parent: None,
        })
    }

    pub fn with_scope(target: JsObjectType, parent: ScopeRef) -> ScopeRef {
        Rc::new(Scope {
            kind: ScopeKind::With,
            target,
            parent: Some(parent),
        })
    }

    pub fn activation(target: JsObjectType, parent: Option<ScopeRef>) -> ScopeRef {
        Rc::new(Scope {
            kind: ScopeKind::Activation,
            target,
            parent,
        })
    }

    pub fn catch_scope(target: JsObjectType, parent: ScopeRef) -> ScopeRef {
        Rc::new(Scope {
            kind: ScopeKind::Catch,
            target,
            parent: Some(parent),
        })
    }

    pub fn kind(&self) -> &ScopeKind {
        &self.kind
    }

    pub fn target(&self) -> &JsObjectType {
        &self.target
    }

    pub fn parent(&self) -> Option<&ScopeRef> {
        self.parent.as_ref()
    }
}

/// Walks the chain and returns the value of the first target that has
/// `name`, own or inherited.
pub fn resolve_identifier(scope: &ScopeRef, name: &str) -> Result<JsValue, JsError> {
    let mut current = Some(scope.clone());
    while let Some(s) = current {
        if has_property(s.target(), name) {
            return Ok(get(s.target(), name));
        }
        current = s.parent().cloned();
    }
    Err(JsError::ReferenceError(format!("'{}' is not defined", name)))
}

/// Like [`resolve_identifier`], but also reports the implicit receiver for
/// a call through the resolved name: the providing scope's target when that
/// scope was injected by `with`, otherwise undefined.
pub fn resolve_identifier_with_receiver(
    scope: &ScopeRef,
    name: &str,
) -> Result<(JsValue, JsValue), JsError> {
    let mut current = Some(scope.clone());
    while let Some(s) = current {
        if has_property(s.target(), name) {
            let value = get(s.target(), name);
            let receiver = if let ScopeKind::With = s.kind() {
                JsValue::Object(s.target().clone())
            } else {
                JsValue::Undefined
            };
            return Ok((value, receiver));
        }
        current = s.parent().cloned();
    }
    Err(JsError::ReferenceError(format!("'{}' is not defined", name)))
}

pub fn is_identifier_resolvable(scope: &ScopeRef, name: &str) -> bool {
    let mut current = Some(scope.clone());
    while let Some(s) = current {
        if has_property(s.target(), name) {
            return true;
        }
        current = s.parent().cloned();
    }
    false
}

/// Writes through the chain: the first target that has `name` (own or
/// inherited) takes the own-entry write; when no scope provides it, the
/// global object does.
pub fn assign_identifier(
    scope: &ScopeRef,
    name: &str,
    value: JsValue,
    global: &JsObjectType,
) -> Result<(), JsError> {
    let mut current = Some(scope.clone());
    let mut receiver: Option<JsObjectType> = None;
    while let Some(s) = current {
        if has_property(s.target(), name) {
            receiver = Some(s.target().clone());
            break;
        }
        current = s.parent().cloned();
    }
    let receiver = receiver.unwrap_or_else(|| global.clone());
    let mut o = (*receiver).borrow_mut();
    o.as_js_object_mut().set(name, value)
}
