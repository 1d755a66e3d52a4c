use async_trait::async_trait;
use sqlx::PgPool;

use crate::site_scope::{
    domain::model::enums::{
        resource_shape::AggregateLink, site_scope_domain_error::SiteScopeDomainError,
    },
    infrastructure::persistence::{
        repositories::linked_location_repository::LinkedLocationRepository,
        sql::query_condition_sql::quoted,
    },
};

pub struct SqlxLinkedLocationRepositoryImpl {
    pool: PgPool,
}

impl SqlxLinkedLocationRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkedLocationRepository for SqlxLinkedLocationRepositoryImpl {
    async fn find_linked_locations(
        &self,
        link: &AggregateLink,
        parent_type: &str,
        parent: &str,
    ) -> Result<Vec<String>, SiteScopeDomainError> {
        let statement = format!(
            "SELECT {location} FROM {table} WHERE {parent} = $1 AND {parent_type} = $2 AND {location} IS NOT NULL",
            location = quoted(&link.location_column)?,
            table = quoted(&link.table)?,
            parent = quoted(&link.parent_column)?,
            parent_type = quoted(&link.parent_type_column)?,
        );

        sqlx::query_scalar::<_, String>(&statement)
            .bind(parent)
            .bind(parent_type)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| SiteScopeDomainError::InfrastructureError(e.to_string()))
    }
}
