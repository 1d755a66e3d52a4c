use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ResolveSiteRequestResource {
    /// Site name or `site_name` alias. Omit for any existing site.
    #[validate(length(max = 140))]
    pub site: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ResolveSiteResponseResource {
    pub site_id: String,
}
