//! Console built-in object.
//!
//! Provides console.log, console.error, console.warn, and console.info. Its
//! presence is what lets diagnostics reach the host, see
//! [`Diagnostics::for_scope`](crate::runner::diagnostics::Diagnostics::for_scope).

use crate::runner::ds::object::JsObject;
use crate::runner::plugin::global_object::GlobalObject;

use super::math::with_functions;

pub const CONSOLE_METHODS: [&str; 4] = ["log", "error", "warn", "info"];

pub fn install(global: &mut GlobalObject) {
    let console = with_functions(JsObject::new_ordinary(), &CONSOLE_METHODS);
    global.define("console", console.into_value());
}
