pub mod principal_id;
pub mod resource_type_name;
pub mod role_name;
pub mod site_id;
pub mod sql_identifier;
