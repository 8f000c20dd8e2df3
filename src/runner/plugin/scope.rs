//! Root scope trait the resolver reads identifiers from.
//!
//! A resolution only ever asks the root scope about the first component of
//! an expression; everything after that is ordinary property access on the
//! values it returns. The scope is never written to.

use crate::runner::ds::value::JsValue;

/// Read-only view of the namespace that unqualified names resolve against.
pub trait ScopeProvider {
    /// Value bound to `name`, or `None` when the scope has no such binding.
    ///
    /// `Some(JsValue::Undefined)` is a binding that exists but holds
    /// `undefined`, which is not the same thing as `None`.
    fn get_binding(&self, name: &str) -> Option<JsValue>;

    /// Existence check, the equivalent of `name in globalThis`.
    fn has_binding(&self, name: &str) -> bool {
        self.get_binding(name).is_some()
    }

    /// The object that represents this scope, if it has one.
    fn global_this(&self) -> Option<JsValue> {
        None
    }

    /// The scope's own code-evaluation function, if it has one.
    ///
    /// Only used as a comparison target; it is never called.
    fn intrinsic_eval(&self) -> Option<JsValue> {
        None
    }

    /// Human-readable name for this scope (for debugging/logging).
    fn name(&self) -> &str;
}
