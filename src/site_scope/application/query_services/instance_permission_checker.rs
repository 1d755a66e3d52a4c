use std::sync::Arc;

use tracing::debug;

use crate::site_scope::{
    application::resolvers::{bridge_resolver::BridgeResolver, site_set_resolver::SiteSetResolver},
    domain::model::{
        entities::{
            allowed_sites::AllowedSites, resource_instance::ResourceInstance,
            resource_registration::ResourceRegistration,
        },
        enums::{
            permission_operation::PermissionOperation, resource_shape::ResourceShape,
            site_scope_domain_error::SiteScopeDomainError,
        },
        value_objects::principal_id::PrincipalId,
    },
    infrastructure::persistence::repositories::scoped_record_repository::ScopedRecordRepository,
};

/// Record-level mirror of the listing filter. Any link in the chain that
/// cannot be resolved is a deny.
pub struct InstancePermissionChecker {
    site_set_resolver: Arc<SiteSetResolver>,
    bridge_resolver: Arc<BridgeResolver>,
    scoped_record_repository: Arc<dyn ScopedRecordRepository>,
}

impl InstancePermissionChecker {
    pub fn new(
        site_set_resolver: Arc<SiteSetResolver>,
        bridge_resolver: Arc<BridgeResolver>,
        scoped_record_repository: Arc<dyn ScopedRecordRepository>,
    ) -> Self {
        Self {
            site_set_resolver,
            bridge_resolver,
            scoped_record_repository,
        }
    }

    /// Every operation is judged by site membership alone.
    pub async fn has_permission(
        &self,
        registration: &ResourceRegistration,
        instance: Option<&ResourceInstance>,
        principal_id: &PrincipalId,
        operation: PermissionOperation,
    ) -> Result<bool, SiteScopeDomainError> {
        let allowed_sites = self
            .site_set_resolver
            .resolve_allowed_sites(principal_id)
            .await?;

        let allowed = match instance {
            _ if allowed_sites.is_unrestricted() => true,
            None => self.type_level(registration, &allowed_sites).await?,
            Some(instance) => {
                self.instance_level(registration, instance, &allowed_sites)
                    .await?
            }
        };

        debug!(
            principal = principal_id.value(),
            resource_type = %registration.resource_type,
            operation = operation.as_str(),
            allowed,
            "has_permission evaluated"
        );

        Ok(allowed)
    }

    async fn type_level(
        &self,
        registration: &ResourceRegistration,
        allowed_sites: &AllowedSites,
    ) -> Result<bool, SiteScopeDomainError> {
        match &registration.shape {
            ResourceShape::Direct { .. }
            | ResourceShape::BridgeTarget { .. }
            | ResourceShape::SelfReferential { .. } => Ok(!allowed_sites.is_empty()),
            ResourceShape::Bridge { .. } | ResourceShape::Aggregate { .. } => {
                let locations = self
                    .bridge_resolver
                    .resolve_allowed_locations(allowed_sites)
                    .await?;
                Ok(!locations.is_empty())
            }
        }
    }

    async fn instance_level(
        &self,
        registration: &ResourceRegistration,
        instance: &ResourceInstance,
        allowed_sites: &AllowedSites,
    ) -> Result<bool, SiteScopeDomainError> {
        match &registration.shape {
            ResourceShape::Direct { .. } => {
                let site = match instance.site() {
                    Some(site) => Some(site.to_string()),
                    None => self
                        .stored_record(registration, instance)
                        .await?
                        .and_then(|record| record.site().map(str::to_string)),
                };
                Ok(allowed_sites.contains(site.as_deref()))
            }
            ResourceShape::BridgeTarget { .. } => {
                let site = self.bridge_resolver.location_site(instance.name()).await?;
                Ok(allowed_sites.contains(site.as_deref()))
            }
            ResourceShape::SelfReferential { .. } => {
                Ok(allowed_sites.contains(instance.name().or(instance.site())))
            }
            ResourceShape::Bridge { .. } => {
                let location = match instance.location() {
                    Some(location) => Some(location.to_string()),
                    None => self
                        .stored_record(registration, instance)
                        .await?
                        .and_then(|record| record.location().map(str::to_string)),
                };
                let site = self.bridge_resolver.location_site(location.as_deref()).await?;
                Ok(allowed_sites.contains(site.as_deref()))
            }
            ResourceShape::Aggregate { link } => {
                let Some(name) = instance.name() else {
                    return Ok(false);
                };
                if allowed_sites.is_empty() {
                    return Ok(false);
                }

                let locations = self
                    .bridge_resolver
                    .linked_locations(link, &registration.resource_type, name)
                    .await?;
                for location in &locations {
                    let site = self.bridge_resolver.location_site(Some(location.as_str())).await?;
                    if allowed_sites.contains(site.as_deref()) {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }

    async fn stored_record(
        &self,
        registration: &ResourceRegistration,
        instance: &ResourceInstance,
    ) -> Result<Option<ResourceInstance>, SiteScopeDomainError> {
        let Some(name) = instance.name() else {
            return Ok(None);
        };

        let record = self
            .scoped_record_repository
            .find_record(registration, name)
            .await?;

        Ok(record.map(|record| record.to_instance()))
    }
}
