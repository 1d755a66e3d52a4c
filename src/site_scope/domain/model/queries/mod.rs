pub mod build_query_condition_query;
pub mod check_permission_query;
pub mod get_scoped_record_query;
pub mod list_scoped_records_query;
pub mod resolve_site_query;
