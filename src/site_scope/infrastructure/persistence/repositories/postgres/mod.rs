pub mod sqlx_linked_location_repository_impl;
pub mod sqlx_location_directory_repository_impl;
pub mod sqlx_role_membership_repository_impl;
pub mod sqlx_scoped_record_repository_impl;
pub mod sqlx_site_directory_repository_impl;
pub mod sqlx_site_grant_repository_impl;
