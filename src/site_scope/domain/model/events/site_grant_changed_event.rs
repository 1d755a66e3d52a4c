use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::site_scope::domain::model::enums::site_grant_change::SiteGrantChange;

#[derive(Clone, Debug)]
pub struct SiteGrantChangedEvent {
    pub event_id: Uuid,
    pub principal_id: String,
    pub site_id: String,
    pub change: SiteGrantChange,
    pub occurred_at: DateTime<Utc>,
}

impl SiteGrantChangedEvent {
    pub fn new(principal_id: &str, site_id: &str, change: SiteGrantChange) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            principal_id: principal_id.to_string(),
            site_id: site_id.to_string(),
            change,
            occurred_at: Utc::now(),
        }
    }
}
