use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct BuildQueryConditionRequestResource {
    #[validate(length(min = 1))]
    pub principal_id: String,
    #[validate(length(min = 1, max = 140))]
    pub resource_type: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct QueryConditionResponseResource {
    /// One of `unrestricted`, `deny_all`, `in_set`, `linked_exists`.
    pub kind: String,
    /// Escaped SQL text; absent when no filtering applies.
    pub sql: Option<String>,
    pub values: Vec<String>,
}
