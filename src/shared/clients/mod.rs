// Shared clients
pub mod swap_api;

pub use swap_api::*;
