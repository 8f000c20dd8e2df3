//! Root scope and the loader plugin built on it.
//!
//! ## Root Scope
//!
//! The resolver never reaches for a process-wide global. It reads the first
//! component of every expression from an injected [`ScopeProvider`], so a
//! test can hand it a fabricated scope and a host can hand it its real one.
//!
//! ```text
//! "window.Math.cos"
//!      ↓
//! 1. "window" in scope?        → ScopeProvider::has_binding
//! 2. scope["window"]           → ScopeProvider::get_binding
//! 3. ["Math"], then ["cos"]    → ordinary property reads on the values
//! ```
//!
//! ### Key Components
//!
//! - **[`ScopeProvider`]**: Read-only view of the root namespace
//! - **[`GlobalObject`]**: Host global object with built-ins and self aliases
//! - **[`GlobalLoader`]**: The `global!` plugin's `load` operation
//! - **[`LoaderConfig`]**: Per-request loader options (build mode)
//!
//! ## Example: Custom Scope
//!
//! ```
//! use require_global::runner::plugin::scope::ScopeProvider;
//! use require_global::runner::plugin::loader::GlobalLoader;
//! use require_global::runner::plugin::config::LoaderConfig;
//! use require_global::runner::ds::value::{JsValue, JsNumberType};
//!
//! struct VersionScope;
//!
//! impl ScopeProvider for VersionScope {
//!     fn get_binding(&self, name: &str) -> Option<JsValue> {
//!         if name == "VERSION" {
//!             Some(JsValue::Number(JsNumberType::Integer(3)))
//!         } else {
//!             None
//!         }
//!     }
//!
//!     fn name(&self) -> &str { "version_scope" }
//! }
//!
//! let loader = GlobalLoader::new(Box::new(VersionScope));
//! let version = loader.load("VERSION", &LoaderConfig::new()).unwrap();
//! assert_eq!(version, JsValue::Number(JsNumberType::Integer(3)));
//! ```

pub mod config;
pub mod global_object;
pub mod loader;
pub mod scope;

pub use config::LoaderConfig;
pub use global_object::GlobalObject;
pub use loader::GlobalLoader;
pub use scope::ScopeProvider;
