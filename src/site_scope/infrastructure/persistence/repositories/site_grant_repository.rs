use async_trait::async_trait;

use crate::site_scope::domain::model::{
    entities::site_grant::SiteGrant,
    enums::site_scope_domain_error::SiteScopeDomainError,
    value_objects::{principal_id::PrincipalId, site_id::SiteId},
};

#[async_trait]
pub trait SiteGrantRepository: Send + Sync {
    /// Raw `target` values of the principal's Site grants, untrimmed.
    async fn find_site_targets(
        &self,
        principal_id: &PrincipalId,
    ) -> Result<Vec<String>, SiteScopeDomainError>;

    async fn find_grants(
        &self,
        principal_id: &PrincipalId,
    ) -> Result<Vec<SiteGrant>, SiteScopeDomainError>;

    /// Returns `false` when an identical grant already exists.
    async fn insert_grant(&self, grant: SiteGrant) -> Result<bool, SiteScopeDomainError>;

    /// Removes every Site grant whose trimmed target equals `site_id`.
    /// Returns `false` when there was nothing to remove.
    async fn delete_grant(
        &self,
        principal_id: &PrincipalId,
        site_id: &SiteId,
    ) -> Result<bool, SiteScopeDomainError>;
}
