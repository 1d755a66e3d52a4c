pub mod query_condition_sql;
