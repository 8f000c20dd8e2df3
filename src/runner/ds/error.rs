use thiserror::Error;

/// Why a dot-notation reference could not be followed.
///
/// The two variants mirror the ECMAScript errors the same reference would
/// raise if it were written as source: an undeclared root name is a
/// `ReferenceError`, reading through `undefined`/`null` is a `TypeError`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    #[error("Require Global: {name} is not defined.")]
    UnresolvedVariable { name: String },
    #[error("Require Global: Can't read {property} of {target}.")]
    UnresolvedProperty { property: String, target: String },
}
impl ResolveError {
    pub fn error_type(&self) -> &'static str {
        match self {
            ResolveError::UnresolvedVariable { .. } => "ReferenceError",
            ResolveError::UnresolvedProperty { .. } => "TypeError",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_library_tag() {
        let e = ResolveError::UnresolvedVariable {
            name: "doesNotExist".to_string(),
        };
        assert_eq!(e.to_string(), "Require Global: doesNotExist is not defined.");
        assert_eq!(e.error_type(), "ReferenceError");

        let e = ResolveError::UnresolvedProperty {
            property: "b".to_string(),
            target: "undefined".to_string(),
        };
        assert_eq!(e.to_string(), "Require Global: Can't read b of undefined.");
        assert_eq!(e.error_type(), "TypeError");
    }
}
