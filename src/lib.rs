pub mod config;
pub mod site_scope;
