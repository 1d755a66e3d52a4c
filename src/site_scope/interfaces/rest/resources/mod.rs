pub mod allowed_sites_response_resource;
pub mod assert_site_access_request_resource;
pub mod assign_role_request_resource;
pub mod build_query_condition_request_resource;
pub mod check_permission_request_resource;
pub mod registry_coverage_response_resource;
pub mod resolve_site_request_resource;
pub mod scoped_record_resource;
pub mod site_grant_request_resource;
pub mod site_scope_error_response_resource;
