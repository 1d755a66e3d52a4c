use async_trait::async_trait;

use crate::site_scope::domain::model::enums::site_scope_domain_error::SiteScopeDomainError;

#[async_trait]
pub trait SiteDirectoryRepository: Send + Sync {
    async fn site_exists(&self, name: &str) -> Result<bool, SiteScopeDomainError>;

    /// Looks a site up by its human label (`site_name`).
    async fn find_site_by_alias(&self, alias: &str) -> Result<Option<String>, SiteScopeDomainError>;

    async fn find_any_site(&self) -> Result<Option<String>, SiteScopeDomainError>;
}
