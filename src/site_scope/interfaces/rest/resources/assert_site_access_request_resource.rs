use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct AssertSiteAccessRequestResource {
    #[validate(length(min = 1))]
    pub principal_id: String,
    pub site: Option<String>,
}
