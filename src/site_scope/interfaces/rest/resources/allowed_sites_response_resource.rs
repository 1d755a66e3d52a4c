use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AllowedSitesResponseResource {
    pub principal_id: String,
    pub privilege_tier: String,
    pub unrestricted: bool,
    /// Empty for unrestricted principals.
    pub sites: Vec<String>,
}
