use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct ResourceInstanceResource {
    pub name: Option<String>,
    pub site: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CheckPermissionRequestResource {
    #[validate(length(min = 1))]
    pub principal_id: String,
    #[validate(length(min = 1, max = 140))]
    pub resource_type: String,
    /// Defaults to `read`.
    pub operation: Option<String>,
    /// Omit to ask about the resource type as a whole.
    pub instance: Option<ResourceInstanceResource>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CheckPermissionResponseResource {
    pub allowed: bool,
}
