pub mod repositories;
pub mod sql;
