//! Host built-ins installation.

use crate::runner::ds::value::{JsNumberType, JsValue};
use crate::runner::plugin::global_object::GlobalObject;

use super::console;
use super::json;
use super::math;

/// Names under which the global object refers to itself.
pub const GLOBAL_SELF_ALIASES: [&str; 3] = ["globalThis", "window", "self"];

/// Install the host built-ins on `global`.
pub fn install_host_builtins(global: &mut GlobalObject) {
    global.define("Infinity", JsValue::Number(JsNumberType::PositiveInfinity));
    global.define("NaN", JsValue::Number(JsNumberType::NaN));
    global.define("undefined", JsValue::Undefined);

    global.install_eval("eval");

    math::install(global);
    json::install(global);
    console::install(global);

    for alias in GLOBAL_SELF_ALIASES.iter() {
        global.add_self_alias(*alias);
    }
}
