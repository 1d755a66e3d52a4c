use async_trait::async_trait;

use crate::site_scope::domain::model::{
    entities::resource_instance::ResourceInstance,
    enums::site_scope_domain_error::SiteScopeDomainError,
};

#[derive(Clone, Debug)]
pub struct SiteAccessRequest {
    pub principal_id: String,
    pub resource_type: String,
    pub instance: Option<ResourceInstance>,
    pub operation: String,
}

/// Guards other contexts call before reading or writing site-scoped data.
#[async_trait]
pub trait SiteAccessFacade: Send + Sync {
    async fn can_access(&self, request: SiteAccessRequest) -> Result<bool, SiteScopeDomainError>;

    /// `AccessDenied` when the principal may not touch the instance.
    async fn ensure_can_access(&self, request: SiteAccessRequest)
    -> Result<(), SiteScopeDomainError>;

    /// A write must name a site, and the principal must hold it.
    async fn ensure_can_write_site(
        &self,
        principal_id: String,
        site: Option<String>,
    ) -> Result<(), SiteScopeDomainError>;
}
