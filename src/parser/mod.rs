#[allow(clippy::module_inception)]
pub mod parser;
pub mod types;

pub use parser::*;
pub use types::*;
