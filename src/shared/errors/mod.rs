// Shared errors
pub mod config_error;
pub mod form_error;
pub mod swap_error;

pub use config_error::*;
pub use form_error::*;
pub use swap_error::*;
