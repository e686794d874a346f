// Swap form domain: client-side form state machine
pub mod models;
pub mod services;
