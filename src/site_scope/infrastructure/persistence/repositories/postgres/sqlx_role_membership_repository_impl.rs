use async_trait::async_trait;
use sqlx::PgPool;

use crate::site_scope::{
    domain::model::{
        enums::site_scope_domain_error::SiteScopeDomainError,
        value_objects::{principal_id::PrincipalId, role_name::RoleName},
    },
    infrastructure::persistence::repositories::role_membership_repository::RoleMembershipRepository,
};

pub struct SqlxRoleMembershipRepositoryImpl {
    pool: PgPool,
}

impl SqlxRoleMembershipRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleMembershipRepository for SqlxRoleMembershipRepositoryImpl {
    async fn find_roles(
        &self,
        principal_id: &PrincipalId,
    ) -> Result<Vec<String>, SiteScopeDomainError> {
        let statement = r#"
            SELECT role_name
            FROM principal_roles
            WHERE principal_id = $1
        "#;

        sqlx::query_scalar::<_, String>(statement)
            .bind(principal_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| SiteScopeDomainError::InfrastructureError(e.to_string()))
    }

    async fn assign_role(
        &self,
        principal_id: &PrincipalId,
        role_name: &RoleName,
    ) -> Result<(), SiteScopeDomainError> {
        let statement = r#"
            INSERT INTO principal_roles (principal_id, role_name)
            VALUES ($1, $2)
            ON CONFLICT (principal_id, role_name)
            DO NOTHING
        "#;

        sqlx::query(statement)
            .bind(principal_id.value())
            .bind(role_name.value())
            .execute(&self.pool)
            .await
            .map_err(|e| SiteScopeDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }
}
