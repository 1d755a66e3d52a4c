use crate::site_scope::domain::model::{
    enums::site_scope_domain_error::SiteScopeDomainError,
    value_objects::{principal_id::PrincipalId, resource_type_name::ResourceTypeName},
};

#[derive(Clone, Debug)]
pub struct GetScopedRecordQuery {
    principal_id: PrincipalId,
    resource_type: ResourceTypeName,
    name: String,
}

impl GetScopedRecordQuery {
    pub fn new(
        principal_id: String,
        resource_type: String,
        name: String,
    ) -> Result<Self, SiteScopeDomainError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(SiteScopeDomainError::NotFound(
                "record name is required".to_string(),
            ));
        }

        Ok(Self {
            principal_id: PrincipalId::new(principal_id)?,
            resource_type: ResourceTypeName::new(resource_type)?,
            name,
        })
    }

    pub fn principal_id(&self) -> &PrincipalId {
        &self.principal_id
    }
    pub fn resource_type(&self) -> &ResourceTypeName {
        &self.resource_type
    }
    pub fn name(&self) -> &str {
        &self.name
    }
}
