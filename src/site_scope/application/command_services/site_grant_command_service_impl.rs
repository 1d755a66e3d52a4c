use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::site_scope::{
    application::resolvers::site_set_resolver::SiteSetResolver,
    domain::{
        model::{
            commands::{
                assign_role_command::AssignRoleCommand, grant_site_command::GrantSiteCommand,
                revoke_site_command::RevokeSiteCommand,
            },
            entities::site_grant::SiteGrant,
            enums::{
                site_grant_change::SiteGrantChange, site_scope_domain_error::SiteScopeDomainError,
            },
            events::site_grant_changed_event::SiteGrantChangedEvent,
        },
        services::site_grant_command_service::SiteGrantCommandService,
    },
    infrastructure::persistence::repositories::{
        role_membership_repository::RoleMembershipRepository,
        site_grant_repository::SiteGrantRepository,
    },
};

pub struct SiteGrantCommandServiceImpl {
    site_set_resolver: Arc<SiteSetResolver>,
    site_grant_repository: Arc<dyn SiteGrantRepository>,
    role_membership_repository: Arc<dyn RoleMembershipRepository>,
}

impl SiteGrantCommandServiceImpl {
    pub fn new(
        site_set_resolver: Arc<SiteSetResolver>,
        site_grant_repository: Arc<dyn SiteGrantRepository>,
        role_membership_repository: Arc<dyn RoleMembershipRepository>,
    ) -> Self {
        Self {
            site_set_resolver,
            site_grant_repository,
            role_membership_repository,
        }
    }
}

#[async_trait]
impl SiteGrantCommandService for SiteGrantCommandServiceImpl {
    async fn handle_grant_site(
        &self,
        command: GrantSiteCommand,
    ) -> Result<Option<SiteGrantChangedEvent>, SiteScopeDomainError> {
        let site_id = self
            .site_set_resolver
            .resolve_site(Some(command.site_identifier()))
            .await?;

        let inserted = self
            .site_grant_repository
            .insert_grant(SiteGrant::new(
                command.principal_id().value(),
                site_id.value(),
            ))
            .await?;
        if !inserted {
            return Ok(None);
        }

        let event = SiteGrantChangedEvent::new(
            command.principal_id().value(),
            site_id.value(),
            SiteGrantChange::Granted,
        );
        info!(
            event_id = %event.event_id,
            principal = %event.principal_id,
            site = %event.site_id,
            change = event.change.as_str(),
            "site grant changed"
        );

        Ok(Some(event))
    }

    async fn handle_revoke_site(
        &self,
        command: RevokeSiteCommand,
    ) -> Result<Option<SiteGrantChangedEvent>, SiteScopeDomainError> {
        // Grants for a site that no longer exists are still revocable by name.
        let site_id = match self
            .site_set_resolver
            .resolve_site(Some(command.site_id().value()))
            .await
        {
            Ok(site_id) => site_id,
            Err(SiteScopeDomainError::NotFound(_)) => command.site_id().clone(),
            Err(error) => return Err(error),
        };

        let removed = self
            .site_grant_repository
            .delete_grant(command.principal_id(), &site_id)
            .await?;
        if !removed {
            return Ok(None);
        }

        let event = SiteGrantChangedEvent::new(
            command.principal_id().value(),
            site_id.value(),
            SiteGrantChange::Revoked,
        );
        info!(
            event_id = %event.event_id,
            principal = %event.principal_id,
            site = %event.site_id,
            change = event.change.as_str(),
            "site grant changed"
        );

        Ok(Some(event))
    }

    async fn handle_assign_role(
        &self,
        command: AssignRoleCommand,
    ) -> Result<(), SiteScopeDomainError> {
        self.role_membership_repository
            .assign_role(command.principal_id(), command.role_name())
            .await?;

        info!(
            principal = command.principal_id().value(),
            role = command.role_name().value(),
            "role assigned"
        );
        Ok(())
    }
}
