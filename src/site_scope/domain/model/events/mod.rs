pub mod site_grant_changed_event;
