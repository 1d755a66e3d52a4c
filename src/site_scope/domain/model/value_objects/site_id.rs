use crate::site_scope::domain::model::enums::site_scope_domain_error::SiteScopeDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SiteId(String);

impl SiteId {
    pub fn new(value: String) -> Result<Self, SiteScopeDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(SiteScopeDomainError::InvalidSiteId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
