use crate::site_scope::domain::model::entities::resource_instance::ResourceInstance;

/// Tenancy-relevant projection of one stored business record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScopedRecord {
    pub resource_type: String,
    pub name: String,
    pub site: Option<String>,
    pub location: Option<String>,
}

impl ScopedRecord {
    pub fn to_instance(&self) -> ResourceInstance {
        ResourceInstance::new(
            Some(self.name.clone()),
            self.site.clone(),
            self.location.clone(),
        )
    }
}
