use crate::site_scope::domain::model::{
    enums::site_scope_domain_error::SiteScopeDomainError,
    value_objects::{principal_id::PrincipalId, role_name::RoleName},
};

#[derive(Clone, Debug)]
pub struct AssignRoleCommand {
    principal_id: PrincipalId,
    role_name: RoleName,
}

impl AssignRoleCommand {
    pub fn new(principal_id: String, role_name: String) -> Result<Self, SiteScopeDomainError> {
        Ok(Self {
            principal_id: PrincipalId::new(principal_id)?,
            role_name: RoleName::new(role_name)?,
        })
    }

    pub fn principal_id(&self) -> &PrincipalId {
        &self.principal_id
    }
    pub fn role_name(&self) -> &RoleName {
        &self.role_name
    }
}
