// Swap domain services
pub mod rate_service;
pub mod token_service;
pub mod state;

pub use rate_service::*;
pub use token_service::*;
pub use state::*;
