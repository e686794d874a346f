// Domains
pub mod swap;
pub mod swap_form;
