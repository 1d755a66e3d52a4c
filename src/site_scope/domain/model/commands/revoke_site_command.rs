use crate::site_scope::domain::model::{
    enums::site_scope_domain_error::SiteScopeDomainError,
    value_objects::{principal_id::PrincipalId, site_id::SiteId},
};

#[derive(Clone, Debug)]
pub struct RevokeSiteCommand {
    principal_id: PrincipalId,
    site_id: SiteId,
}

impl RevokeSiteCommand {
    pub fn new(principal_id: String, site_id: String) -> Result<Self, SiteScopeDomainError> {
        Ok(Self {
            principal_id: PrincipalId::new(principal_id)?,
            site_id: SiteId::new(site_id)?,
        })
    }

    pub fn principal_id(&self) -> &PrincipalId {
        &self.principal_id
    }
    pub fn site_id(&self) -> &SiteId {
        &self.site_id
    }
}
