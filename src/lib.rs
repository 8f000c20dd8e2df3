//! # require-global - safe global references for module loaders
//!
//! Lets a module loader treat values that live on the global object (objects
//! left behind by third-party scripts, host built-ins) as ordinary modules.
//! A dependency on `global!Math.cos` resolves to the value of `Math.cos`:
//! - Dot-notation only, split on `.` and followed one property at a time
//! - No code is evaluated, so `x = 1` or `Math["cos"]` can only fail
//! - Failures carry the ECMAScript error class the same reference would raise
//! - Resolving to the global object or to `eval` succeeds with a warning
//!
//! ## Quick Start
//!
//! ```
//! use require_global::runner::plugin::global_object::GlobalObject;
//! use require_global::runner::plugin::loader::GlobalLoader;
//! use require_global::runner::plugin::config::LoaderConfig;
//! use require_global::runner::ds::error::ResolveError;
//! use require_global::runner::ds::value::JsValue;
//!
//! let loader = GlobalLoader::new(Box::new(GlobalObject::with_host_builtins()));
//! let config = LoaderConfig::new();
//!
//! let cos = loader.load("Math.cos", &config).unwrap();
//! println!("Math.cos = {}", cos);
//!
//! assert_eq!(loader.load("Math.doesNotExist", &config), Ok(JsValue::Undefined));
//!
//! match loader.load("doesNotExist", &config) {
//!     Err(e @ ResolveError::UnresolvedVariable { .. }) => {
//!         assert_eq!(e.error_type(), "ReferenceError");
//!     }
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```
//!
//! ## Architecture
//!
//! - **[`parser`]** - Splits expressions into components, classifies identifier chains
//! - **[`runner`]** - Resolution against a root scope
//!   - **[`runner::ds`]** - Values, objects and error types
//!   - **[`runner::resolve`]** - Reference resolver and safety auditor
//!   - **[`runner::diagnostics`]** - Best-effort warning output
//!   - **[`runner::plugin`]** - Root scope trait, global object, loader plugin
//!   - **[`runner::std_lib`]** - Host built-ins for the default global object

pub mod parser;
pub mod runner;
