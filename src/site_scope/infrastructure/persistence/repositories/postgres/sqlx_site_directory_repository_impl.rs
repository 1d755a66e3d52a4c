use async_trait::async_trait;
use sqlx::PgPool;

use crate::site_scope::{
    domain::model::enums::site_scope_domain_error::SiteScopeDomainError,
    infrastructure::persistence::repositories::site_directory_repository::SiteDirectoryRepository,
};

pub struct SqlxSiteDirectoryRepositoryImpl {
    pool: PgPool,
}

impl SqlxSiteDirectoryRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SiteDirectoryRepository for SqlxSiteDirectoryRepositoryImpl {
    async fn site_exists(&self, name: &str) -> Result<bool, SiteScopeDomainError> {
        let statement = "SELECT EXISTS (SELECT 1 FROM sites WHERE name = $1)";

        sqlx::query_scalar::<_, bool>(statement)
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| SiteScopeDomainError::InfrastructureError(e.to_string()))
    }

    async fn find_site_by_alias(
        &self,
        alias: &str,
    ) -> Result<Option<String>, SiteScopeDomainError> {
        let statement = r#"
            SELECT name
            FROM sites
            WHERE site_name = $1
            ORDER BY name ASC
            LIMIT 1
        "#;

        sqlx::query_scalar::<_, String>(statement)
            .bind(alias)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| SiteScopeDomainError::InfrastructureError(e.to_string()))
    }

    async fn find_any_site(&self) -> Result<Option<String>, SiteScopeDomainError> {
        sqlx::query_scalar::<_, String>("SELECT name FROM sites ORDER BY name ASC LIMIT 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| SiteScopeDomainError::InfrastructureError(e.to_string()))
    }
}
