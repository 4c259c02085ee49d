//! The process-wide `undefined` value.

use std::fmt;
use std::fmt::{Display, Formatter};

lazy_static! {
    static ref INSTANCE: Undefined = Undefined { _private: () };
}

/// The single `undefined` value shared by every realm in the process.
///
/// The instance is established exactly once, on first access from any
/// thread; later accesses always observe the same instance. Compiled code
/// is free to keep the `&'static` reference around, since it can never
/// disagree with what [`Undefined::instance`] returns.
pub struct Undefined {
    _private: (),
}

impl Undefined {
    pub fn instance() -> &'static Undefined {
        &INSTANCE
    }
}

impl Display for Undefined {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "undefined")
    }
}

impl fmt::Debug for Undefined {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Undefined")
    }
}
