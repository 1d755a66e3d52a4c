use async_trait::async_trait;

use crate::site_scope::domain::model::{
    commands::{
        assign_role_command::AssignRoleCommand, grant_site_command::GrantSiteCommand,
        revoke_site_command::RevokeSiteCommand,
    },
    enums::site_scope_domain_error::SiteScopeDomainError,
    events::site_grant_changed_event::SiteGrantChangedEvent,
};

#[async_trait]
pub trait SiteGrantCommandService: Send + Sync {
    /// Idempotent; `None` when the grant already existed.
    async fn handle_grant_site(
        &self,
        command: GrantSiteCommand,
    ) -> Result<Option<SiteGrantChangedEvent>, SiteScopeDomainError>;

    /// Accepts the site name or its alias; padded stored targets match too.
    async fn handle_revoke_site(
        &self,
        command: RevokeSiteCommand,
    ) -> Result<Option<SiteGrantChangedEvent>, SiteScopeDomainError>;

    async fn handle_assign_role(&self, command: AssignRoleCommand)
    -> Result<(), SiteScopeDomainError>;
}
