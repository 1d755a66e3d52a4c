use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct GrantSiteRequestResource {
    #[validate(length(min = 1))]
    pub principal_id: String,
    /// Site name or `site_name` alias.
    #[validate(length(min = 1, max = 140))]
    pub site: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct RevokeSiteRequestResource {
    #[validate(length(min = 1))]
    pub principal_id: String,
    #[validate(length(min = 1, max = 140))]
    pub site_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SiteGrantChangedResponseResource {
    pub changed: bool,
    pub event_id: Option<Uuid>,
    pub change: Option<String>,
    pub site_id: Option<String>,
    pub occurred_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SiteGrantResource {
    pub id: Uuid,
    pub principal_id: String,
    pub allow_kind: String,
    pub target: String,
    pub granted_at: DateTime<Utc>,
}
