pub mod components;
#[allow(clippy::module_inception)]
pub mod renderer;
pub mod renders;
pub mod traits;

pub use components::*;
pub use renderer::*;
pub use traits::*;
