use std::sync::Arc;

use tracing::debug;

use crate::site_scope::{
    application::resolvers::privilege_classifier::PrivilegeClassifier,
    domain::model::{
        entities::allowed_sites::AllowedSites,
        enums::site_scope_domain_error::SiteScopeDomainError,
        value_objects::{principal_id::PrincipalId, site_id::SiteId},
    },
    infrastructure::persistence::repositories::{
        site_directory_repository::SiteDirectoryRepository,
        site_grant_repository::SiteGrantRepository,
    },
};

pub struct SiteSetResolver {
    classifier: Arc<PrivilegeClassifier>,
    site_grant_repository: Arc<dyn SiteGrantRepository>,
    site_directory_repository: Arc<dyn SiteDirectoryRepository>,
}

impl SiteSetResolver {
    pub fn new(
        classifier: Arc<PrivilegeClassifier>,
        site_grant_repository: Arc<dyn SiteGrantRepository>,
        site_directory_repository: Arc<dyn SiteDirectoryRepository>,
    ) -> Self {
        Self {
            classifier,
            site_grant_repository,
            site_directory_repository,
        }
    }

    pub fn classifier(&self) -> &PrivilegeClassifier {
        &self.classifier
    }

    /// Reads grants on every call; there is no cache to invalidate.
    pub async fn resolve_allowed_sites(
        &self,
        principal_id: &PrincipalId,
    ) -> Result<AllowedSites, SiteScopeDomainError> {
        let tier = self.classifier.classify(principal_id).await;
        if tier.bypasses_site_filtering() {
            return Ok(AllowedSites::Unrestricted);
        }

        let targets = self
            .site_grant_repository
            .find_site_targets(principal_id)
            .await?;

        Ok(AllowedSites::scoped(targets))
    }

    pub async fn has_site_permission(
        &self,
        site: Option<&str>,
        principal_id: &PrincipalId,
    ) -> Result<bool, SiteScopeDomainError> {
        let allowed = self.resolve_allowed_sites(principal_id).await?;
        Ok(allowed.contains(site))
    }

    pub async fn assert_site_access(
        &self,
        site: Option<&str>,
        principal_id: &PrincipalId,
    ) -> Result<(), SiteScopeDomainError> {
        if self.has_site_permission(site, principal_id).await? {
            return Ok(());
        }

        debug!(
            principal = principal_id.value(),
            site = site.unwrap_or_default(),
            "site access denied"
        );
        Err(SiteScopeDomainError::AccessDenied)
    }

    /// Exact site name first, then the `site_name` alias. Without an
    /// identifier any existing site is returned.
    pub async fn resolve_site(
        &self,
        identifier: Option<&str>,
    ) -> Result<SiteId, SiteScopeDomainError> {
        let identifier = identifier
            .map(str::trim)
            .filter(|value| !value.is_empty());

        let Some(identifier) = identifier else {
            let site = self
                .site_directory_repository
                .find_any_site()
                .await?
                .ok_or_else(|| {
                    SiteScopeDomainError::NotFound(
                        "No Site records exist; create a Site first.".to_string(),
                    )
                })?;
            return SiteId::new(site);
        };

        if self.site_directory_repository.site_exists(identifier).await? {
            return SiteId::new(identifier.to_string());
        }

        match self
            .site_directory_repository
            .find_site_by_alias(identifier)
            .await?
        {
            Some(site) => SiteId::new(site),
            None => Err(SiteScopeDomainError::NotFound(format!(
                "Site not found: {identifier}"
            ))),
        }
    }
}
