//! Host global object, the default root scope.
//!
//! Every binding lives as a property of one global object, so reading a root
//! name and reading a property of `globalThis` agree. The object's self
//! aliases (`window`, `globalThis`, ...) resolve to the object itself.
//!
//! ```
//! use require_global::runner::plugin::global_object::GlobalObject;
//! use require_global::runner::plugin::scope::ScopeProvider;
//! use require_global::runner::ds::value::JsValue;
//!
//! let mut global = GlobalObject::new();
//! global.define("answer", JsValue::Boolean(true));
//! global.add_self_alias("window");
//!
//! assert!(global.has_binding("answer"));
//! assert_eq!(global.get_binding("window"), global.global_this());
//! ```

use crate::runner::ds::object::{JsObject, JsObjectType};
use crate::runner::ds::value::JsValue;
use crate::runner::plugin::scope::ScopeProvider;
use crate::runner::std_lib::install_host_builtins;

pub struct GlobalObject {
    object: JsObjectType,
    /// The eval function installed by [`GlobalObject::install_eval`]. Kept
    /// separately so rebinding the `eval` property does not change it.
    intrinsic_eval: Option<JsObjectType>,
}

impl GlobalObject {
    /// An empty global object with no bindings at all.
    pub fn new() -> Self {
        GlobalObject {
            object: JsObject::new_global().into_shared(),
            intrinsic_eval: None,
        }
    }

    /// A global object populated with the host built-ins (`Math`, `console`,
    /// `JSON`, `eval`, `undefined`, `NaN`, `Infinity`, and the `globalThis`,
    /// `window` and `self` aliases).
    pub fn with_host_builtins() -> Self {
        let mut global = Self::new();
        install_host_builtins(&mut global);
        global
    }

    pub fn define(&mut self, name: impl Into<String>, value: JsValue) {
        self.object.borrow_mut().define_own_property(name, value);
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.object.borrow_mut().delete(name)
    }

    pub fn add_self_alias(&mut self, name: impl Into<String>) {
        self.object.borrow_mut().add_self_alias(name);
    }

    /// Installs the evaluation function under `name` and records it as this
    /// scope's intrinsic eval. Returns the installed function.
    pub fn install_eval(&mut self, name: impl Into<String>) -> JsValue {
        let name = name.into();
        let eval = JsObject::new_function(name.clone()).into_shared();
        self.intrinsic_eval = Some(eval.clone());
        let value = JsValue::Object(eval);
        self.define(name, value.clone());
        value
    }

    pub fn binding_names(&self) -> Vec<String> {
        self.object.borrow().own_property_keys()
    }

    pub fn as_value(&self) -> JsValue {
        JsValue::Object(self.object.clone())
    }
}

impl Default for GlobalObject {
    fn default() -> Self {
        Self::with_host_builtins()
    }
}

impl ScopeProvider for GlobalObject {
    fn get_binding(&self, name: &str) -> Option<JsValue> {
        if !self.has_binding(name) {
            return None;
        }
        self.as_value().get_property(name)
    }

    fn has_binding(&self, name: &str) -> bool {
        self.as_value().has_property(name)
    }

    fn global_this(&self) -> Option<JsValue> {
        Some(self.as_value())
    }

    fn intrinsic_eval(&self) -> Option<JsValue> {
        self.intrinsic_eval.as_ref().map(|e| JsValue::Object(e.clone()))
    }

    fn name(&self) -> &str {
        "global"
    }
}
