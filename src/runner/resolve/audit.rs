use crate::runner::diagnostics::Diagnostics;
use crate::runner::ds::value::JsValue;
use crate::runner::plugin::scope::ScopeProvider;

/// Something surprising about a successfully resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyFinding {
    /// The value is the scope's global object itself.
    GlobalObject,
    /// The value is the scope's eval function. Calling it through a module
    /// binding is an indirect eval, which runs in the global scope.
    IndirectEval,
}

impl SafetyFinding {
    pub fn message(&self) -> &'static str {
        match self {
            SafetyFinding::GlobalObject => "Reference resolves to the global object.",
            SafetyFinding::IndirectEval => {
                "Indirect eval calls have different runtime behavior (http://www.ecma-international.org/ecma-262/5.1/#sec-10.4.2)."
            }
        }
    }
}

/// Compares `value` by identity against the scope's eval function and
/// global object.
pub fn inspect(value: &JsValue, scope: &dyn ScopeProvider) -> Option<SafetyFinding> {
    if let JsValue::Object(_) = value {
        if scope.intrinsic_eval().as_ref() == Some(value) {
            return Some(SafetyFinding::IndirectEval);
        }
        if scope.global_this().as_ref() == Some(value) {
            return Some(SafetyFinding::GlobalObject);
        }
    }
    None
}

/// Emits at most one warning about `value`. The value itself is untouched.
pub fn audit(
    value: &JsValue,
    scope: &dyn ScopeProvider,
    diagnostics: &Diagnostics,
) -> Option<SafetyFinding> {
    let finding = inspect(value, scope);
    if let Some(f) = finding {
        diagnostics.warn(f.message());
    }
    finding
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::ds::object::JsObject;
    use crate::runner::plugin::global_object::GlobalObject;

    #[test]
    fn test_eval_is_flagged_by_identity() {
        let mut global = GlobalObject::new();
        let eval = global.install_eval("eval");
        global.define("evaluate", eval.clone());
        assert_eq!(inspect(&eval, &global), Some(SafetyFinding::IndirectEval));
    }

    #[test]
    fn test_unrelated_function_named_eval_is_not_flagged() {
        let global = GlobalObject::new();
        let impostor = JsObject::new_function("eval").into_value();
        assert_eq!(inspect(&impostor, &global), None);
    }

    #[test]
    fn test_global_object_is_flagged() {
        let global = GlobalObject::new();
        assert_eq!(
            inspect(&global.as_value(), &global),
            Some(SafetyFinding::GlobalObject)
        );
    }

    #[test]
    fn test_primitives_are_never_flagged() {
        let global = GlobalObject::with_host_builtins();
        assert_eq!(inspect(&JsValue::Undefined, &global), None);
        assert_eq!(inspect(&JsValue::String("eval".to_string()), &global), None);
    }
}
