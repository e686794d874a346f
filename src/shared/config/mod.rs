// Shared configuration
pub mod app_config;
pub mod market;

pub use app_config::*;
pub use market::*;
