// Swap form services
pub mod backend;
pub mod controller;
pub mod render;
pub mod validation;

pub use backend::*;
pub use controller::*;
pub use render::*;
pub use validation::*;
