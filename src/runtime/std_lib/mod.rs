//! Engine-provided built-ins, installed on a realm's intrinsics at boot.

use crate::runtime::ds::realm::JsRealmType;

pub mod array;

pub fn install(realm: &JsRealmType) {
    array::install(realm);
}
