pub mod default_resource_catalog;
pub mod resource_registry;
