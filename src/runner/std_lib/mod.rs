//! Host built-in objects installed on the default global object.
//!
//! Only the shape of each object matters to the resolver: its properties and
//! the identity of its function values. None of these functions is ever
//! called.

pub mod core;
pub mod console;
pub mod math;
pub mod json;

pub use self::core::install_host_builtins;
