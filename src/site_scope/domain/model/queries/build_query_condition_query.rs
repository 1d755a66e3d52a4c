use crate::site_scope::domain::model::{
    enums::site_scope_domain_error::SiteScopeDomainError,
    value_objects::{principal_id::PrincipalId, resource_type_name::ResourceTypeName},
};

#[derive(Clone, Debug)]
pub struct BuildQueryConditionQuery {
    principal_id: PrincipalId,
    resource_type: ResourceTypeName,
}

impl BuildQueryConditionQuery {
    pub fn new(principal_id: String, resource_type: String) -> Result<Self, SiteScopeDomainError> {
        Ok(Self {
            principal_id: PrincipalId::new(principal_id)?,
            resource_type: ResourceTypeName::new(resource_type)?,
        })
    }

    pub fn principal_id(&self) -> &PrincipalId {
        &self.principal_id
    }
    pub fn resource_type(&self) -> &ResourceTypeName {
        &self.resource_type
    }
}
