//! Math built-in object.
//!
//! Provides mathematical constants and functions.

use crate::runner::ds::object::JsObject;
use crate::runner::ds::value::{JsNumberType, JsValue};
use crate::runner::plugin::global_object::GlobalObject;

const MATH_CONSTANTS: [(&str, f64); 8] = [
    ("E", std::f64::consts::E),
    ("LN10", std::f64::consts::LN_10),
    ("LN2", std::f64::consts::LN_2),
    ("LOG10E", std::f64::consts::LOG10_E),
    ("LOG2E", std::f64::consts::LOG2_E),
    ("PI", std::f64::consts::PI),
    ("SQRT1_2", std::f64::consts::FRAC_1_SQRT_2),
    ("SQRT2", std::f64::consts::SQRT_2),
];

const MATH_FUNCTIONS: [&str; 35] = [
    "abs", "floor", "ceil", "round", "trunc", "sign", "min", "max", "sqrt", "cbrt", "pow", "exp",
    "expm1", "log", "log10", "log2", "log1p", "sin", "cos", "tan", "asin", "acos", "atan",
    "atan2", "sinh", "cosh", "tanh", "asinh", "acosh", "atanh", "hypot", "random", "clz32",
    "imul", "fround",
];

/// Install the Math object on the global object.
pub fn install(global: &mut GlobalObject) {
    let mut math = JsObject::new_ordinary();
    for (name, value) in MATH_CONSTANTS.iter() {
        math.define_own_property(*name, JsValue::Number(JsNumberType::Float(*value)));
    }
    let math = with_functions(math, &MATH_FUNCTIONS);
    global.define("Math", math.into_value());
}

/// Adds one host function object per name to `obj`.
pub(crate) fn with_functions(mut obj: JsObject, names: &[&str]) -> JsObject {
    for name in names {
        obj.define_own_property(*name, JsObject::new_function(*name).into_value());
    }
    obj
}
