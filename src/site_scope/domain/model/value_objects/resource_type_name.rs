use regex::Regex;

use crate::site_scope::domain::model::enums::site_scope_domain_error::SiteScopeDomainError;

lazy_static::lazy_static! {
    static ref RESOURCE_TYPE_REGEX: Regex =
        Regex::new(r"^[A-Za-z][A-Za-z0-9 _-]{0,139}$").expect("valid regex");
}

/// Display name of an isolated resource type, e.g. `Lot` or `Crop Cycle`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ResourceTypeName(String);

impl ResourceTypeName {
    pub fn new(value: String) -> Result<Self, SiteScopeDomainError> {
        let trimmed = value.trim();
        if !RESOURCE_TYPE_REGEX.is_match(trimmed) {
            return Err(SiteScopeDomainError::InvalidResourceType);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
