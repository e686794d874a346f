// Swap form models
pub mod form;
pub mod view;

pub use form::*;
pub use view::*;
