// Swap domain handlers
pub mod rate_handler;
pub mod token_handler;

pub use rate_handler::*;
pub use token_handler::*;
