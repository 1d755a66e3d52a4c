use crate::site_scope::domain::model::{
    enums::site_scope_domain_error::SiteScopeDomainError,
    value_objects::{principal_id::PrincipalId, resource_type_name::ResourceTypeName},
};

#[derive(Clone, Debug)]
pub struct ListScopedRecordsQuery {
    principal_id: PrincipalId,
    resource_type: ResourceTypeName,
    limit: i64,
    offset: i64,
}

pub struct ListScopedRecordsQueryParts {
    pub principal_id: String,
    pub resource_type: String,
    pub limit: i64,
    pub offset: i64,
}

impl ListScopedRecordsQuery {
    pub fn new(parts: ListScopedRecordsQueryParts) -> Result<Self, SiteScopeDomainError> {
        if parts.limit <= 0 || parts.limit > 500 || parts.offset < 0 {
            return Err(SiteScopeDomainError::InvalidQueryParameters);
        }

        Ok(Self {
            principal_id: PrincipalId::new(parts.principal_id)?,
            resource_type: ResourceTypeName::new(parts.resource_type)?,
            limit: parts.limit,
            offset: parts.offset,
        })
    }

    pub fn principal_id(&self) -> &PrincipalId {
        &self.principal_id
    }
    pub fn resource_type(&self) -> &ResourceTypeName {
        &self.resource_type
    }
    pub fn limit(&self) -> i64 {
        self.limit
    }
    pub fn offset(&self) -> i64 {
        self.offset
    }
}
