use std::{collections::BTreeSet, sync::Arc};

use crate::site_scope::{
    domain::model::{
        entities::allowed_sites::AllowedSites,
        enums::{resource_shape::AggregateLink, site_scope_domain_error::SiteScopeDomainError},
    },
    infrastructure::persistence::repositories::{
        linked_location_repository::LinkedLocationRepository,
        location_directory_repository::LocationDirectoryRepository,
    },
};

/// Maps locations to sites and aggregates to their linked locations.
pub struct BridgeResolver {
    location_directory_repository: Arc<dyn LocationDirectoryRepository>,
    linked_location_repository: Arc<dyn LinkedLocationRepository>,
}

impl BridgeResolver {
    pub fn new(
        location_directory_repository: Arc<dyn LocationDirectoryRepository>,
        linked_location_repository: Arc<dyn LinkedLocationRepository>,
    ) -> Self {
        Self {
            location_directory_repository,
            linked_location_repository,
        }
    }

    /// Locations whose own site is allowed. Bypass principals get an empty
    /// set; callers short-circuit them before asking.
    pub async fn resolve_allowed_locations(
        &self,
        allowed_sites: &AllowedSites,
    ) -> Result<BTreeSet<String>, SiteScopeDomainError> {
        let Some(sites) = allowed_sites.sites() else {
            return Ok(BTreeSet::new());
        };
        if sites.is_empty() {
            return Ok(BTreeSet::new());
        }

        let sites = sites.iter().cloned().collect::<Vec<_>>();
        let locations = self
            .location_directory_repository
            .find_locations_by_sites(&sites)
            .await?;

        Ok(locations
            .into_iter()
            .filter(|location| !location.trim().is_empty())
            .collect())
    }

    pub async fn location_site(
        &self,
        location: Option<&str>,
    ) -> Result<Option<String>, SiteScopeDomainError> {
        let Some(location) = location.filter(|value| !value.trim().is_empty()) else {
            return Ok(None);
        };

        let site = self
            .location_directory_repository
            .find_location_site(location)
            .await?;

        Ok(site.filter(|value| !value.trim().is_empty()))
    }

    pub async fn linked_locations(
        &self,
        link: &AggregateLink,
        parent_type: &str,
        parent: &str,
    ) -> Result<Vec<String>, SiteScopeDomainError> {
        let locations = self
            .linked_location_repository
            .find_linked_locations(link, parent_type, parent)
            .await?;

        Ok(locations
            .into_iter()
            .filter(|location| !location.trim().is_empty())
            .collect())
    }
}
