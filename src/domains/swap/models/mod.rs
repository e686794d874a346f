// Swap domain models
pub mod rate;
pub mod token;

pub use rate::*;
pub use token::*;
