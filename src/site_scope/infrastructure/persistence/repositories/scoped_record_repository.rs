use async_trait::async_trait;

use crate::site_scope::domain::model::{
    entities::{resource_registration::ResourceRegistration, scoped_record::ScopedRecord},
    enums::site_scope_domain_error::SiteScopeDomainError,
    predicates::query_condition::QueryCondition,
};

#[derive(Clone, Debug)]
pub struct ListScopedRecordsCriteria {
    pub registration: ResourceRegistration,
    pub condition: QueryCondition,
    pub limit: i64,
    pub offset: i64,
}

#[async_trait]
pub trait ScopedRecordRepository: Send + Sync {
    async fn find_record(
        &self,
        registration: &ResourceRegistration,
        name: &str,
    ) -> Result<Option<ScopedRecord>, SiteScopeDomainError>;

    async fn list_records(
        &self,
        criteria: ListScopedRecordsCriteria,
    ) -> Result<Vec<ScopedRecord>, SiteScopeDomainError>;
}
