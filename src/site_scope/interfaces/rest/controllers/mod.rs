pub mod site_scope_rest_controller;
