use crate::site_scope::domain::model::{
    entities::resource_instance::ResourceInstance,
    enums::{
        permission_operation::PermissionOperation, site_scope_domain_error::SiteScopeDomainError,
    },
    value_objects::{principal_id::PrincipalId, resource_type_name::ResourceTypeName},
};

#[derive(Clone, Debug)]
pub struct CheckPermissionQuery {
    principal_id: PrincipalId,
    resource_type: ResourceTypeName,
    instance: Option<ResourceInstance>,
    operation: PermissionOperation,
}

pub struct CheckPermissionQueryParts {
    pub principal_id: String,
    pub resource_type: String,
    pub instance: Option<ResourceInstance>,
    pub operation: String,
}

impl CheckPermissionQuery {
    pub fn new(parts: CheckPermissionQueryParts) -> Result<Self, SiteScopeDomainError> {
        Ok(Self {
            principal_id: PrincipalId::new(parts.principal_id)?,
            resource_type: ResourceTypeName::new(parts.resource_type)?,
            instance: parts.instance,
            operation: parts.operation.parse()?,
        })
    }

    pub fn principal_id(&self) -> &PrincipalId {
        &self.principal_id
    }
    pub fn resource_type(&self) -> &ResourceTypeName {
        &self.resource_type
    }
    pub fn instance(&self) -> Option<&ResourceInstance> {
        self.instance.as_ref()
    }
    pub fn operation(&self) -> PermissionOperation {
        self.operation
    }
}
