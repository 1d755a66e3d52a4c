use async_trait::async_trait;

use crate::site_scope::domain::model::{
    entities::{allowed_sites::AllowedSites, scoped_record::ScopedRecord, site_grant::SiteGrant},
    enums::{privilege_tier::PrivilegeTier, site_scope_domain_error::SiteScopeDomainError},
    predicates::query_condition::QueryCondition,
    queries::{
        build_query_condition_query::BuildQueryConditionQuery,
        check_permission_query::CheckPermissionQuery,
        get_scoped_record_query::GetScopedRecordQuery,
        list_scoped_records_query::ListScopedRecordsQuery, resolve_site_query::ResolveSiteQuery,
    },
    registry::resource_registry::RegistryCoverageReport,
    value_objects::{principal_id::PrincipalId, site_id::SiteId},
};

#[async_trait]
pub trait SiteScopeQueryService: Send + Sync {
    async fn handle_classify_principal(
        &self,
        principal_id: &PrincipalId,
    ) -> Result<PrivilegeTier, SiteScopeDomainError>;

    async fn handle_build_query_condition(
        &self,
        query: BuildQueryConditionQuery,
    ) -> Result<QueryCondition, SiteScopeDomainError>;

    async fn handle_check_permission(
        &self,
        query: CheckPermissionQuery,
    ) -> Result<bool, SiteScopeDomainError>;

    async fn handle_resolve_site(
        &self,
        query: ResolveSiteQuery,
    ) -> Result<SiteId, SiteScopeDomainError>;

    async fn handle_allowed_sites(
        &self,
        principal_id: &PrincipalId,
    ) -> Result<AllowedSites, SiteScopeDomainError>;

    async fn handle_has_site_permission(
        &self,
        site: Option<&str>,
        principal_id: &PrincipalId,
    ) -> Result<bool, SiteScopeDomainError>;

    async fn handle_assert_site_access(
        &self,
        site: Option<&str>,
        principal_id: &PrincipalId,
    ) -> Result<(), SiteScopeDomainError>;

    async fn handle_list_records(
        &self,
        query: ListScopedRecordsQuery,
    ) -> Result<Vec<ScopedRecord>, SiteScopeDomainError>;

    async fn handle_get_record(
        &self,
        query: GetScopedRecordQuery,
    ) -> Result<ScopedRecord, SiteScopeDomainError>;

    async fn handle_list_grants(
        &self,
        principal_id: &PrincipalId,
    ) -> Result<Vec<SiteGrant>, SiteScopeDomainError>;

    fn handle_registry_coverage(&self) -> RegistryCoverageReport;
}
