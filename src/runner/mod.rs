pub mod diagnostics;
pub mod ds;
pub mod plugin;
pub mod resolve;
pub mod std_lib;
