//! JSON built-in object.

use crate::runner::ds::object::JsObject;
use crate::runner::plugin::global_object::GlobalObject;

use super::math::with_functions;

pub fn install(global: &mut GlobalObject) {
    let json = with_functions(JsObject::new_ordinary(), &["parse", "stringify"]);
    global.define("JSON", json.into_value());
}
