use crate::site_scope::domain::model::{
    enums::site_scope_domain_error::SiteScopeDomainError, value_objects::principal_id::PrincipalId,
};

#[derive(Clone, Debug)]
pub struct GrantSiteCommand {
    principal_id: PrincipalId,
    site_identifier: String,
}

impl GrantSiteCommand {
    /// `site_identifier` may be the site name or its human alias.
    pub fn new(principal_id: String, site_identifier: String) -> Result<Self, SiteScopeDomainError> {
        let site_identifier = site_identifier.trim().to_string();
        if site_identifier.is_empty() {
            return Err(SiteScopeDomainError::InvalidSiteId);
        }

        Ok(Self {
            principal_id: PrincipalId::new(principal_id)?,
            site_identifier,
        })
    }

    pub fn principal_id(&self) -> &PrincipalId {
        &self.principal_id
    }
    pub fn site_identifier(&self) -> &str {
        &self.site_identifier
    }
}
