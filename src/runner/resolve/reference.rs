use crate::parser::Expression;
use crate::runner::ds::error::ResolveError;
use crate::runner::ds::value::JsValue;
use crate::runner::plugin::scope::ScopeProvider;

/// Base of a single reference step, as in ECMAScript's Reference type.
enum ReferenceBase {
    /// The root scope, for the first component when it names a binding.
    Scope,
    Value(JsValue),
    /// Undeclared root name, or a step off `undefined`/`null`.
    Unresolvable,
}

/// Resolves a dot-notation expression against `scope`.
pub fn resolve(expression: &str, scope: &dyn ScopeProvider) -> Result<JsValue, ResolveError> {
    resolve_expression(&Expression::parse(expression), scope)
}

pub fn resolve_expression(
    expression: &Expression,
    scope: &dyn ScopeProvider,
) -> Result<JsValue, ResolveError> {
    if !expression.is_identifier_chain() {
        tracing::debug!(
            expression = expression.source(),
            "expression is not a plain identifier chain"
        );
    }
    let mut reference_target = JsValue::Undefined;
    for (property_index, property_name) in expression.components().iter().enumerate() {
        reference_target =
            resolve_reference(reference_target, property_name, property_index, scope)?;
        tracing::trace!(
            property = property_name.as_str(),
            index = property_index,
            "resolved reference step"
        );
    }
    Ok(reference_target)
}

/// Follows one component of the chain, consuming the previous target.
fn resolve_reference(
    reference_target: JsValue,
    property_name: &str,
    property_index: usize,
    scope: &dyn ScopeProvider,
) -> Result<JsValue, ResolveError> {
    let base = get_reference_base(reference_target.clone(), property_name, property_index, scope);
    match base {
        ReferenceBase::Scope => Ok(scope.get_binding(property_name).unwrap_or(JsValue::Undefined)),
        ReferenceBase::Value(value) => match value.get_property(property_name) {
            Some(v) => Ok(v),
            None => Err(unresolvable(reference_target, property_name, property_index)),
        },
        ReferenceBase::Unresolvable => {
            Err(unresolvable(reference_target, property_name, property_index))
        }
    }
}

fn get_reference_base(
    reference_target: JsValue,
    property_name: &str,
    property_index: usize,
    scope: &dyn ScopeProvider,
) -> ReferenceBase {
    if property_index == 0 {
        // Existence, not value: a binding holding `undefined` still resolves.
        return if scope.has_binding(property_name) {
            ReferenceBase::Scope
        } else {
            ReferenceBase::Unresolvable
        };
    }
    if reference_target.is_nullish() {
        ReferenceBase::Unresolvable
    } else {
        ReferenceBase::Value(reference_target)
    }
}

fn unresolvable(reference_target: JsValue, property_name: &str, property_index: usize) -> ResolveError {
    if property_index == 0 {
        ResolveError::UnresolvedVariable {
            name: property_name.to_string(),
        }
    } else {
        ResolveError::UnresolvedProperty {
            property: property_name.to_string(),
            target: reference_target.to_string(),
        }
    }
}
