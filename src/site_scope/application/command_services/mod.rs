pub mod site_grant_command_service_impl;
