use async_trait::async_trait;
use sqlx::PgPool;

use crate::site_scope::{
    domain::model::enums::site_scope_domain_error::SiteScopeDomainError,
    infrastructure::persistence::repositories::location_directory_repository::LocationDirectoryRepository,
};

pub struct SqlxLocationDirectoryRepositoryImpl {
    pool: PgPool,
}

impl SqlxLocationDirectoryRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationDirectoryRepository for SqlxLocationDirectoryRepositoryImpl {
    async fn find_location_site(
        &self,
        location: &str,
    ) -> Result<Option<String>, SiteScopeDomainError> {
        let row = sqlx::query_scalar::<_, Option<String>>(
            "SELECT site FROM locations WHERE name = $1",
        )
        .bind(location)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| SiteScopeDomainError::InfrastructureError(e.to_string()))?;

        Ok(row.flatten())
    }

    async fn find_locations_by_sites(
        &self,
        sites: &[String],
    ) -> Result<Vec<String>, SiteScopeDomainError> {
        if sites.is_empty() {
            return Ok(Vec::new());
        }

        let statement = r#"
            SELECT name
            FROM locations
            WHERE site = ANY($1)
            ORDER BY name ASC
        "#;

        sqlx::query_scalar::<_, String>(statement)
            .bind(sites)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| SiteScopeDomainError::InfrastructureError(e.to_string()))
    }
}
