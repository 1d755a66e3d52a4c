pub mod bridge_resolver;
pub mod privilege_classifier;
pub mod site_set_resolver;
