//! Best-effort warning output.
//!
//! Warnings go to whatever [`DiagnosticSink`] the host provided. With no
//! sink every warning is dropped; emitting can never fail or block the
//! resolution that triggered it.

use std::fmt;

use crate::runner::plugin::scope::ScopeProvider;

pub const LIBRARY_TAG: &str = "Require Global";

/// Amends a message with the library prefix.
pub fn make_library_string(s: &str) -> String {
    format!("{}: {}", LIBRARY_TAG, s)
}

pub trait DiagnosticSink {
    fn warn(&self, message: &str);
}

/// Forwards warnings to `tracing` under the `require_global` target.
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "require_global", "{}", message);
    }
}

pub struct Diagnostics {
    sink: Option<Box<dyn DiagnosticSink>>,
}

impl Diagnostics {
    pub fn new(sink: Box<dyn DiagnosticSink>) -> Self {
        Diagnostics { sink: Some(sink) }
    }

    /// Diagnostics that drop every warning.
    pub fn silent() -> Self {
        Diagnostics { sink: None }
    }

    pub fn tracing() -> Self {
        Self::new(Box::new(TracingSink))
    }

    /// Tracing-backed diagnostics if `scope` exposes a callable
    /// `console.warn`, silent otherwise.
    pub fn for_scope(scope: &dyn ScopeProvider) -> Self {
        if has_console_warn(scope) {
            Self::tracing()
        } else {
            Self::silent()
        }
    }

    pub fn is_silent(&self) -> bool {
        self.sink.is_none()
    }

    pub fn warn(&self, message: &str) {
        if let Some(sink) = &self.sink {
            sink.warn(&make_library_string(message));
        }
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::tracing()
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("silent", &self.is_silent())
            .finish()
    }
}

fn has_console_warn(scope: &dyn ScopeProvider) -> bool {
    scope
        .get_binding("console")
        .and_then(|console| console.get_property("warn"))
        .map(|warn| warn.is_callable())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::ds::object::JsObject;
    use crate::runner::ds::value::JsValue;
    use crate::runner::plugin::global_object::GlobalObject;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl DiagnosticSink for Recorder {
        fn warn(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_warn_adds_library_prefix() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let diagnostics = Diagnostics::new(Box::new(Recorder(log.clone())));
        diagnostics.warn("careful");
        assert_eq!(*log.borrow(), vec!["Require Global: careful".to_string()]);
    }

    #[test]
    fn test_silent_diagnostics_drop_warnings() {
        let diagnostics = Diagnostics::silent();
        assert!(diagnostics.is_silent());
        diagnostics.warn("nobody hears this");
    }

    #[test]
    fn test_for_scope_requires_console_warn() {
        let mut global = GlobalObject::new();
        assert!(Diagnostics::for_scope(&global).is_silent());

        global.define("console", JsObject::new_ordinary().into_value());
        assert!(Diagnostics::for_scope(&global).is_silent());

        global.define(
            "console",
            JsObject::new_ordinary()
                .with_property("warn", JsValue::Boolean(true))
                .into_value(),
        );
        assert!(Diagnostics::for_scope(&global).is_silent());

        assert!(!Diagnostics::for_scope(&GlobalObject::with_host_builtins()).is_silent());
    }
}
