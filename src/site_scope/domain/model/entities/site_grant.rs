use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const SITE_ALLOW_KIND: &str = "Site";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SiteGrant {
    pub id: Uuid,
    pub principal_id: String,
    pub allow_kind: String,
    pub target: String,
    pub granted_at: DateTime<Utc>,
}

impl SiteGrant {
    pub fn new(principal_id: &str, target: &str) -> Self {
        Self {
            id: Uuid::now_v7(),
            principal_id: principal_id.to_string(),
            allow_kind: SITE_ALLOW_KIND.to_string(),
            target: target.to_string(),
            granted_at: Utc::now(),
        }
    }
}
