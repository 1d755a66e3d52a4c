pub mod instance_permission_checker;
pub mod query_condition_builder;
pub mod site_scope_query_service_impl;
