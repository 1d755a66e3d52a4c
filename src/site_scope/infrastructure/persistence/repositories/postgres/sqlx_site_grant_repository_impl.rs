use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::site_scope::{
    domain::model::{
        entities::site_grant::{SITE_ALLOW_KIND, SiteGrant},
        enums::site_scope_domain_error::SiteScopeDomainError,
        value_objects::{principal_id::PrincipalId, site_id::SiteId},
    },
    infrastructure::persistence::repositories::site_grant_repository::SiteGrantRepository,
};

pub struct SqlxSiteGrantRepositoryImpl {
    pool: PgPool,
}

impl SqlxSiteGrantRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SiteGrantRepository for SqlxSiteGrantRepositoryImpl {
    async fn find_site_targets(
        &self,
        principal_id: &PrincipalId,
    ) -> Result<Vec<String>, SiteScopeDomainError> {
        let statement = r#"
            SELECT target
            FROM site_grants
            WHERE principal_id = $1 AND allow_kind = $2
        "#;

        sqlx::query_scalar::<_, String>(statement)
            .bind(principal_id.value())
            .bind(SITE_ALLOW_KIND)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| SiteScopeDomainError::InfrastructureError(e.to_string()))
    }

    async fn find_grants(
        &self,
        principal_id: &PrincipalId,
    ) -> Result<Vec<SiteGrant>, SiteScopeDomainError> {
        let statement = r#"
            SELECT id, principal_id, allow_kind, target, granted_at
            FROM site_grants
            WHERE principal_id = $1
            ORDER BY granted_at ASC
        "#;

        let rows = sqlx::query(statement)
            .bind(principal_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| SiteScopeDomainError::InfrastructureError(e.to_string()))?;

        rows.into_iter()
            .map(|row| {
                Ok(SiteGrant {
                    id: row
                        .try_get::<Uuid, _>("id")
                        .map_err(|e| SiteScopeDomainError::InfrastructureError(e.to_string()))?,
                    principal_id: row
                        .try_get::<String, _>("principal_id")
                        .map_err(|e| SiteScopeDomainError::InfrastructureError(e.to_string()))?,
                    allow_kind: row
                        .try_get::<String, _>("allow_kind")
                        .map_err(|e| SiteScopeDomainError::InfrastructureError(e.to_string()))?,
                    target: row
                        .try_get::<String, _>("target")
                        .map_err(|e| SiteScopeDomainError::InfrastructureError(e.to_string()))?,
                    granted_at: row
                        .try_get::<DateTime<Utc>, _>("granted_at")
                        .map_err(|e| SiteScopeDomainError::InfrastructureError(e.to_string()))?,
                })
            })
            .collect()
    }

    async fn insert_grant(&self, grant: SiteGrant) -> Result<bool, SiteScopeDomainError> {
        let statement = r#"
            INSERT INTO site_grants (id, principal_id, allow_kind, target, granted_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (principal_id, allow_kind, target)
            DO NOTHING
        "#;

        let result = sqlx::query(statement)
            .bind(grant.id)
            .bind(&grant.principal_id)
            .bind(&grant.allow_kind)
            .bind(&grant.target)
            .bind(grant.granted_at)
            .execute(&self.pool)
            .await
            .map_err(|e| SiteScopeDomainError::InfrastructureError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_grant(
        &self,
        principal_id: &PrincipalId,
        site_id: &SiteId,
    ) -> Result<bool, SiteScopeDomainError> {
        let statement = r#"
            DELETE FROM site_grants
            WHERE principal_id = $1 AND allow_kind = $2 AND btrim(target) = $3
        "#;

        let result = sqlx::query(statement)
            .bind(principal_id.value())
            .bind(SITE_ALLOW_KIND)
            .bind(site_id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| SiteScopeDomainError::InfrastructureError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
