pub mod commands;
pub mod entities;
pub mod enums;
pub mod events;
pub mod predicates;
pub mod queries;
pub mod registry;
pub mod value_objects;
