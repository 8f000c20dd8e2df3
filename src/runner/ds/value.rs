use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::runner::ds::object::JsObjectType;

pub const TYPE_STR_UNDEFINED: &str = "undefined";
pub const TYPE_STR_NULL: &str = "null";

pub enum JsValue {
    Undefined,
    Null,
    Boolean(bool),
    String(String),
    Number(JsNumberType),
    Object(JsObjectType),
}
impl JsValue {
    /// `true` for the two values that cannot be the base of a property read.
    pub fn is_nullish(&self) -> bool {
        matches!(self, JsValue::Undefined | JsValue::Null)
    }

    pub fn is_callable(&self) -> bool {
        match self {
            JsValue::Object(o) => (**o).borrow().is_callable(),
            _ => false,
        }
    }

    /// Reads `key` off this value the way a member expression would.
    ///
    /// Returns `None` when the value is `undefined` or `null`, i.e. when the
    /// read itself would throw. A missing property yields `Some(Undefined)`.
    pub fn get_property(&self, key: &str) -> Option<JsValue> {
        match self {
            JsValue::Undefined | JsValue::Null => None,
            JsValue::Boolean(_) | JsValue::Number(_) => Some(JsValue::Undefined),
            JsValue::String(s) => Some(string_get_property(s, key)),
            JsValue::Object(o) => {
                let obj = (**o).borrow();
                if obj.is_self_alias(key) {
                    Some(JsValue::Object(o.clone()))
                } else {
                    Some(obj.get(key))
                }
            }
        }
    }

    /// ECMAScript `key in value`. Only objects have properties to test.
    pub fn has_property(&self, key: &str) -> bool {
        match self {
            JsValue::Object(o) => (**o).borrow().has_property(key),
            _ => false,
        }
    }
}

fn string_get_property(s: &str, key: &str) -> JsValue {
    if key == "length" {
        return JsValue::Number(JsNumberType::Integer(s.encode_utf16().count() as i64));
    }
    match canonical_index(key) {
        Some(idx) => match s.encode_utf16().nth(idx) {
            Some(unit) => JsValue::String(String::from_utf16_lossy(&[unit])),
            None => JsValue::Undefined,
        },
        None => JsValue::Undefined,
    }
}

/// Only plain decimal integers without a leading zero count as indices.
fn canonical_index(key: &str) -> Option<usize> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<usize>().ok()
}

impl Clone for JsValue {
    fn clone(&self) -> Self {
        match self {
            JsValue::Undefined => JsValue::Undefined,
            JsValue::String(d) => JsValue::String(d.to_string()),
            JsValue::Boolean(d) => JsValue::Boolean(*d),
            JsValue::Null => JsValue::Null,
            JsValue::Number(d) => JsValue::Number(d.clone()),
            JsValue::Object(o) => JsValue::Object(o.clone()),
        }
    }
}
impl Display for JsValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Undefined => write!(f, "{}", TYPE_STR_UNDEFINED),
            JsValue::Null => write!(f, "{}", TYPE_STR_NULL),
            JsValue::Boolean(b) => write!(f, "{}", b),
            JsValue::String(s) => write!(f, "{}", s),
            JsValue::Number(n) => write!(f, "{}", n),
            JsValue::Object(o) => write!(f, "{}", (**o).borrow()),
        }
    }
}

impl fmt::Debug for JsValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Undefined => write!(f, "JsValue::Undefined"),
            JsValue::Null => write!(f, "JsValue::Null"),
            JsValue::Boolean(b) => write!(f, "JsValue::Boolean({})", b),
            JsValue::String(s) => write!(f, "JsValue::String({:?})", s),
            JsValue::Number(n) => write!(f, "JsValue::Number({:?})", n),
            JsValue::Object(o) => write!(f, "JsValue::Object({})", (**o).borrow()),
        }
    }
}

/// Primitives compare by value, objects by reference identity.
impl PartialEq for JsValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsValue::Undefined, JsValue::Undefined) => true,
            (JsValue::Null, JsValue::Null) => true,
            (JsValue::Boolean(a), JsValue::Boolean(b)) => a == b,
            (JsValue::String(a), JsValue::String(b)) => a == b,
            (JsValue::Number(a), JsValue::Number(b)) => a == b,
            (JsValue::Object(a), JsValue::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum JsNumberType {
    Integer(i64),
    Float(f64),
    NaN,
    PositiveInfinity,
    NegativeInfinity,
}
impl Display for JsNumberType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            JsNumberType::Integer(i) => write!(f, "{}", i),
            JsNumberType::Float(nf) => write!(f, "{}", nf),
            JsNumberType::NaN => write!(f, "NaN"),
            JsNumberType::PositiveInfinity => write!(f, "Infinity"),
            JsNumberType::NegativeInfinity => write!(f, "-Infinity"),
        }
    }
}
impl Clone for JsNumberType {
    fn clone(&self) -> Self {
        match self {
            JsNumberType::Integer(i) => JsNumberType::Integer(*i),
            JsNumberType::Float(nf) => JsNumberType::Float(*nf),
            JsNumberType::NaN => JsNumberType::NaN,
            JsNumberType::PositiveInfinity => JsNumberType::PositiveInfinity,
            JsNumberType::NegativeInfinity => JsNumberType::NegativeInfinity,
        }
    }
}
