pub mod site_access_facade;
