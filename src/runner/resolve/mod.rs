//! Dot-notation reference resolution against a root scope.
//!
//! An expression such as `Math.cos` is split into components and followed
//! one property read at a time, the same way the ECMAScript reference
//! `Math.cos` would be evaluated, except that nothing is ever parsed or run
//! as code. Reading an undeclared root name fails like a `ReferenceError`,
//! reading through `undefined`/`null` fails like a `TypeError`, and a chain
//! that simply ends on `undefined` succeeds.
//!
//! ```
//! use require_global::runner::resolve::resolve;
//! use require_global::runner::plugin::global_object::GlobalObject;
//! use require_global::runner::plugin::scope::ScopeProvider;
//! use require_global::runner::ds::value::JsValue;
//!
//! let global = GlobalObject::with_host_builtins();
//! let cos = resolve("Math.cos", &global).unwrap();
//! let math = global.get_binding("Math").unwrap();
//! assert_eq!(Some(cos), math.get_property("cos"));
//!
//! assert_eq!(resolve("Math.doesNotExist", &global), Ok(JsValue::Undefined));
//! assert!(resolve("doesNotExist", &global).is_err());
//! ```

pub mod audit;
pub mod reference;

pub use audit::{audit, inspect, SafetyFinding};
pub use reference::{resolve, resolve_expression};
