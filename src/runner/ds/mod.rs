pub mod error;
pub mod object;
pub mod value;
