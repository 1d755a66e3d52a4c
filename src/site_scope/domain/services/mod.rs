pub mod site_grant_command_service;
pub mod site_scope_query_service;
