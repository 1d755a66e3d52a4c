pub mod query_condition;
pub mod sql_text;
