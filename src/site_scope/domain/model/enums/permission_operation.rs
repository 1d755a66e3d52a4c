use std::str::FromStr;

use super::site_scope_domain_error::SiteScopeDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PermissionOperation {
    Read,
    Create,
    Write,
    Delete,
}

impl PermissionOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Create => "create",
            Self::Write => "write",
            Self::Delete => "delete",
        }
    }
}

impl FromStr for PermissionOperation {
    type Err = SiteScopeDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "read" => Ok(Self::Read),
            "create" => Ok(Self::Create),
            "write" | "update" => Ok(Self::Write),
            "delete" => Ok(Self::Delete),
            _ => Err(SiteScopeDomainError::InvalidOperation),
        }
    }
}
