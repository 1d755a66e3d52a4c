pub mod allowed_sites;
pub mod resource_instance;
pub mod resource_registration;
pub mod scoped_record;
pub mod site_grant;
