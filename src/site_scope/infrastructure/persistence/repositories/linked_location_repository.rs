use async_trait::async_trait;

use crate::site_scope::domain::model::enums::{
    resource_shape::AggregateLink, site_scope_domain_error::SiteScopeDomainError,
};

#[async_trait]
pub trait LinkedLocationRepository: Send + Sync {
    async fn find_linked_locations(
        &self,
        link: &AggregateLink,
        parent_type: &str,
        parent: &str,
    ) -> Result<Vec<String>, SiteScopeDomainError>;
}
