// Swap domain: token catalog + rate lookup
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
