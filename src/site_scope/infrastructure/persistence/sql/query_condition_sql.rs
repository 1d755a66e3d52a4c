use sqlx::{Postgres, QueryBuilder};

use crate::site_scope::domain::model::{
    enums::site_scope_domain_error::SiteScopeDomainError,
    predicates::{query_condition::QueryCondition, sql_text::quote_identifier},
    value_objects::sql_identifier::SqlIdentifier,
};

/// Quotes a registry identifier after validating it.
pub fn quoted(identifier: &str) -> Result<String, SiteScopeDomainError> {
    let identifier = SqlIdentifier::new(identifier)?;
    Ok(quote_identifier(identifier.value()))
}

/// Appends `condition` as a boolean SQL expression. Site and location values
/// always travel as bound parameters.
pub fn push_query_condition(
    builder: &mut QueryBuilder<'_, Postgres>,
    condition: &QueryCondition,
) -> Result<(), SiteScopeDomainError> {
    match condition {
        QueryCondition::Unrestricted => {
            builder.push("1=1");
        }
        QueryCondition::DenyAll => {
            builder.push("1=0");
        }
        QueryCondition::InSet {
            table,
            column,
            values,
        } => {
            builder.push(format!("{}.{} = ANY(", quoted(table)?, quoted(column)?));
            builder.push_bind(values.clone());
            builder.push(")");
        }
        QueryCondition::LinkedExists {
            table,
            key_column,
            parent_type,
            link,
            values,
        } => {
            builder.push(format!(
                "EXISTS (SELECT 1 FROM {} ll WHERE ll.{} = {}.{} AND ll.{} = ",
                quoted(&link.table)?,
                quoted(&link.parent_column)?,
                quoted(table)?,
                quoted(key_column)?,
                quoted(&link.parent_type_column)?
            ));
            builder.push_bind(parent_type.clone());
            builder.push(format!(" AND ll.{} = ANY(", quoted(&link.location_column)?));
            builder.push_bind(values.clone());
            builder.push("))");
        }
    }

    Ok(())
}
