pub mod site_access_facade_impl;
