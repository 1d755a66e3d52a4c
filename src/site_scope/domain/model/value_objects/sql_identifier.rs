use regex::Regex;

use crate::site_scope::domain::model::enums::site_scope_domain_error::SiteScopeDomainError;

lazy_static::lazy_static! {
    static ref SQL_IDENTIFIER_REGEX: Regex =
        Regex::new(r"^[a-z_][a-z0-9_]{0,62}$").expect("valid regex");
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SqlIdentifier(String);

impl SqlIdentifier {
    pub fn new(value: &str) -> Result<Self, SiteScopeDomainError> {
        if !SQL_IDENTIFIER_REGEX.is_match(value) {
            return Err(SiteScopeDomainError::InvalidIdentifier(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
