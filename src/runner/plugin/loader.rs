//! The `global!` loader plugin.
//!
//! A module loader hands this plugin the resource part of an id such as
//! `global!Math.cos` and gets back either the resolved value or the
//! classified failure. During build passes the plugin answers with a `null`
//! placeholder without looking at the scope.
//!
//! ```
//! use require_global::runner::plugin::loader::GlobalLoader;
//! use require_global::runner::plugin::config::LoaderConfig;
//! use require_global::runner::plugin::global_object::GlobalObject;
//! use require_global::runner::ds::value::JsValue;
//!
//! let loader = GlobalLoader::new(Box::new(GlobalObject::with_host_builtins()));
//!
//! let cos = loader.load_module("global!Math.cos", &LoaderConfig::new()).unwrap();
//! assert!(cos.is_callable());
//!
//! let placeholder = loader.load("anything at all", &LoaderConfig::build());
//! assert_eq!(placeholder, Ok(JsValue::Null));
//! ```

use crate::runner::diagnostics::Diagnostics;
use crate::runner::ds::error::ResolveError;
use crate::runner::ds::value::JsValue;
use crate::runner::plugin::config::LoaderConfig;
use crate::runner::plugin::scope::ScopeProvider;
use crate::runner::resolve::{audit, resolve};

/// Prefix a loader module id carries when it is routed to this plugin.
pub const PLUGIN_PREFIX: &str = "global!";

/// Strips [`PLUGIN_PREFIX`] from a module id. Ids without it are returned
/// unchanged.
pub fn resource_name(module_id: &str) -> &str {
    if module_id.starts_with(PLUGIN_PREFIX) {
        &module_id[PLUGIN_PREFIX.len()..]
    } else {
        module_id
    }
}

pub struct GlobalLoader {
    scope: Box<dyn ScopeProvider>,
    diagnostics: Diagnostics,
}

impl GlobalLoader {
    /// A loader over `scope` whose warnings reach the host only if the scope
    /// exposes `console.warn`.
    pub fn new(scope: Box<dyn ScopeProvider>) -> Self {
        let diagnostics = Diagnostics::for_scope(scope.as_ref());
        GlobalLoader { scope, diagnostics }
    }

    pub fn with_diagnostics(scope: Box<dyn ScopeProvider>, diagnostics: Diagnostics) -> Self {
        GlobalLoader { scope, diagnostics }
    }

    pub fn scope(&self) -> &dyn ScopeProvider {
        self.scope.as_ref()
    }

    /// Resolves `name` and audits the result.
    ///
    /// The returned value may be `JsValue::Undefined`; only an unresolvable
    /// reference is an error.
    pub fn load(&self, name: &str, config: &LoaderConfig) -> Result<JsValue, ResolveError> {
        if config.is_build {
            tracing::debug!(scope = self.scope.name(), name, "build pass, skipping resolution");
            return Ok(JsValue::Null);
        }
        let value = resolve(name, self.scope.as_ref())?;
        audit(&value, self.scope.as_ref(), &self.diagnostics);
        Ok(value)
    }

    /// Like [`load`](Self::load), for a full module id (`global!Math.cos`).
    pub fn load_module(
        &self,
        module_id: &str,
        config: &LoaderConfig,
    ) -> Result<JsValue, ResolveError> {
        self.load(resource_name(module_id), config)
    }
}
