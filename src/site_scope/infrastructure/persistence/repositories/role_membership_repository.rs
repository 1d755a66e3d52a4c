use async_trait::async_trait;

use crate::site_scope::domain::model::{
    enums::site_scope_domain_error::SiteScopeDomainError,
    value_objects::{principal_id::PrincipalId, role_name::RoleName},
};

#[async_trait]
pub trait RoleMembershipRepository: Send + Sync {
    async fn find_roles(
        &self,
        principal_id: &PrincipalId,
    ) -> Result<Vec<String>, SiteScopeDomainError>;

    async fn assign_role(
        &self,
        principal_id: &PrincipalId,
        role_name: &RoleName,
    ) -> Result<(), SiteScopeDomainError>;
}
