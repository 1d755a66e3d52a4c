use async_trait::async_trait;

use crate::site_scope::domain::model::enums::site_scope_domain_error::SiteScopeDomainError;

#[async_trait]
pub trait LocationDirectoryRepository: Send + Sync {
    async fn find_location_site(
        &self,
        location: &str,
    ) -> Result<Option<String>, SiteScopeDomainError>;

    async fn find_locations_by_sites(
        &self,
        sites: &[String],
    ) -> Result<Vec<String>, SiteScopeDomainError>;
}
