use std::sync::Arc;

use tracing::warn;

use crate::site_scope::{
    domain::model::{enums::privilege_tier::PrivilegeTier, value_objects::principal_id::PrincipalId},
    infrastructure::persistence::repositories::role_membership_repository::RoleMembershipRepository,
};

pub const DEFAULT_SUPER_PRINCIPAL: &str = "Administrator";
pub const DEFAULT_GLOBAL_ROLE: &str = "System Manager";

#[derive(Clone, Debug)]
pub struct PrivilegeSettings {
    pub super_principal: String,
    pub global_role: String,
}

impl Default for PrivilegeSettings {
    fn default() -> Self {
        Self {
            super_principal: DEFAULT_SUPER_PRINCIPAL.to_string(),
            global_role: DEFAULT_GLOBAL_ROLE.to_string(),
        }
    }
}

pub struct PrivilegeClassifier {
    role_membership_repository: Arc<dyn RoleMembershipRepository>,
    settings: PrivilegeSettings,
}

impl PrivilegeClassifier {
    pub fn new(
        role_membership_repository: Arc<dyn RoleMembershipRepository>,
        settings: PrivilegeSettings,
    ) -> Self {
        Self {
            role_membership_repository,
            settings,
        }
    }

    /// Total: a failed role lookup classifies the principal as scoped.
    pub async fn classify(&self, principal_id: &PrincipalId) -> PrivilegeTier {
        if principal_id.value() == self.settings.super_principal {
            return PrivilegeTier::Unrestricted;
        }

        match self.role_membership_repository.find_roles(principal_id).await {
            Ok(roles) if roles.iter().any(|role| role == &self.settings.global_role) => {
                PrivilegeTier::GlobalRole
            }
            Ok(_) => PrivilegeTier::Scoped,
            Err(error) => {
                warn!(
                    principal = principal_id.value(),
                    %error,
                    "role lookup failed, treating principal as scoped"
                );
                PrivilegeTier::Scoped
            }
        }
    }
}
