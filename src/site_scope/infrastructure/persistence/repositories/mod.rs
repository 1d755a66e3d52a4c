pub mod linked_location_repository;
pub mod location_directory_repository;
pub mod postgres;
pub mod role_membership_repository;
pub mod scoped_record_repository;
pub mod site_directory_repository;
pub mod site_grant_repository;
