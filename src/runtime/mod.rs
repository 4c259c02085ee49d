//! The runtime half of the engine: values, objects, scopes, realms and the
//! built-in library that compiled code executes against.

pub mod ds;
pub mod std_lib;
