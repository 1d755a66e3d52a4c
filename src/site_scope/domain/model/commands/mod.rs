pub mod assign_role_command;
pub mod grant_site_command;
pub mod revoke_site_command;
