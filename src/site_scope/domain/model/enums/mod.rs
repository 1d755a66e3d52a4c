pub mod permission_operation;
pub mod privilege_tier;
pub mod resource_shape;
pub mod site_grant_change;
pub mod site_scope_domain_error;
