//! Token swap demo: mock token/rate API plus the swap form state machine.
pub mod domains;
pub mod routes;
pub mod shared;
