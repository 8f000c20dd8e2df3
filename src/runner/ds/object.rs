use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::runner::ds::value::JsValue;

pub type JsObjectType = Rc<RefCell<JsObject>>;

pub enum ObjectKind {
    Ordinary,
    /// A host function. Only its identity matters here; nothing ever calls it.
    Function { name: String },
    /// The global object. `self_aliases` are names under which it refers to
    /// itself (`window`, `globalThis`, ...), answered without storing a cycle.
    Global { self_aliases: Vec<String> },
}

pub struct JsObject {
    kind: ObjectKind,
    properties: HashMap<String, JsValue>,
    prototype: Option<JsObjectType>,
}
impl JsObject {
    pub fn new(kind: ObjectKind) -> Self {
        JsObject {
            kind,
            properties: HashMap::new(),
            prototype: None,
        }
    }

    pub fn new_ordinary() -> Self {
        Self::new(ObjectKind::Ordinary)
    }

    pub fn new_function(name: impl Into<String>) -> Self {
        Self::new(ObjectKind::Function { name: name.into() })
    }

    pub fn new_global() -> Self {
        Self::new(ObjectKind::Global {
            self_aliases: Vec::new(),
        })
    }

    pub fn with_prototype(mut self, prototype: JsObjectType) -> Self {
        self.prototype = Some(prototype);
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: JsValue) -> Self {
        self.define_own_property(key, value);
        self
    }

    pub fn into_shared(self) -> JsObjectType {
        Rc::new(RefCell::new(self))
    }

    pub fn into_value(self) -> JsValue {
        JsValue::Object(self.into_shared())
    }

    pub fn kind(&self) -> &ObjectKind {
        &self.kind
    }

    pub fn is_callable(&self) -> bool {
        matches!(self.kind, ObjectKind::Function { .. })
    }

    pub fn is_self_alias(&self, key: &str) -> bool {
        match &self.kind {
            ObjectKind::Global { self_aliases } => self_aliases.iter().any(|a| a == key),
            _ => false,
        }
    }

    /// Makes `alias` a property of a global object that refers back to it.
    /// Returns `false` for any other kind of object.
    pub fn add_self_alias(&mut self, alias: impl Into<String>) -> bool {
        match &mut self.kind {
            ObjectKind::Global { self_aliases } => {
                let alias = alias.into();
                self.properties.remove(&alias);
                if !self_aliases.contains(&alias) {
                    self_aliases.push(alias);
                }
                true
            }
            _ => false,
        }
    }

    pub fn get_own_property(&self, key: &str) -> Option<&JsValue> {
        self.properties.get(key)
    }

    pub fn define_own_property(&mut self, key: impl Into<String>, value: JsValue) {
        let key = key.into();
        if let ObjectKind::Global { self_aliases } = &mut self.kind {
            self_aliases.retain(|a| *a != key);
        }
        self.properties.insert(key, value);
    }

    pub fn delete(&mut self, key: &str) -> bool {
        if let ObjectKind::Global { self_aliases } = &mut self.kind {
            self_aliases.retain(|a| a != key);
        }
        self.properties.remove(key).is_some()
    }

    pub fn has_property(&self, key: &str) -> bool {
        if self.properties.contains_key(key) || self.is_self_alias(key) {
            true
        } else {
            match &self.prototype {
                None => false,
                Some(o) => (**o).borrow().has_property(key),
            }
        }
    }

    /// `[[Get]]` for data properties: own property first, then the prototype
    /// chain, `undefined` when nothing defines `key`.
    pub fn get(&self, key: &str) -> JsValue {
        match self.get_own_property(key) {
            Some(value) => value.clone(),
            None => match &self.prototype {
                None => JsValue::Undefined,
                Some(p) => (**p).borrow().get(key),
            },
        }
    }

    pub fn own_property_keys(&self) -> Vec<String> {
        let mut keys = self.properties.keys().cloned().collect::<Vec<String>>();
        if let ObjectKind::Global { self_aliases } = &self.kind {
            keys.extend(self_aliases.iter().cloned());
        }
        keys.sort();
        keys
    }
}
impl Display for JsObject {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ObjectKind::Ordinary => write!(f, "[object Object]"),
            ObjectKind::Function { name } => write!(f, "function {}() {{ [native code] }}", name),
            ObjectKind::Global { .. } => write!(f, "[object global]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::ds::value::JsNumberType;

    #[test]
    fn test_get_walks_prototype_chain() {
        let proto = JsObject::new_ordinary()
            .with_property("inherited", JsValue::Boolean(true))
            .into_shared();
        let obj = JsObject::new_ordinary().with_prototype(proto);
        assert_eq!(obj.get("inherited"), JsValue::Boolean(true));
        assert!(obj.has_property("inherited"));
        assert!(obj.get_own_property("inherited").is_none());
    }

    #[test]
    fn test_missing_property_is_undefined() {
        let obj = JsObject::new_ordinary();
        assert_eq!(obj.get("nope"), JsValue::Undefined);
        assert!(!obj.has_property("nope"));
    }

    #[test]
    fn test_property_holding_undefined_exists() {
        let obj = JsObject::new_ordinary().with_property("u", JsValue::Undefined);
        assert!(obj.has_property("u"));
        assert_eq!(obj.get("u"), JsValue::Undefined);
    }

    #[test]
    fn test_self_alias_only_on_global() {
        let mut ordinary = JsObject::new_ordinary();
        assert!(!ordinary.add_self_alias("window"));

        let mut global = JsObject::new_global();
        assert!(global.add_self_alias("window"));
        assert!(global.has_property("window"));
        assert_eq!(global.own_property_keys(), vec!["window".to_string()]);

        global.define_own_property("window", JsValue::Number(JsNumberType::Integer(1)));
        assert!(!global.is_self_alias("window"));
    }

    #[test]
    fn test_display_by_kind() {
        assert_eq!(JsObject::new_ordinary().to_string(), "[object Object]");
        assert_eq!(
            JsObject::new_function("cos").to_string(),
            "function cos() { [native code] }"
        );
    }
}
