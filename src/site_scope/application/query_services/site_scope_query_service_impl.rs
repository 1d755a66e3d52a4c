use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::site_scope::{
    application::{
        query_services::{
            instance_permission_checker::InstancePermissionChecker,
            query_condition_builder::QueryConditionBuilder,
        },
        resolvers::site_set_resolver::SiteSetResolver,
    },
    domain::{
        model::{
            entities::{
                allowed_sites::AllowedSites, resource_instance::ResourceInstance,
                scoped_record::ScopedRecord, site_grant::SiteGrant,
            },
            enums::{
                permission_operation::PermissionOperation, privilege_tier::PrivilegeTier,
                site_scope_domain_error::SiteScopeDomainError,
            },
            predicates::query_condition::QueryCondition,
            queries::{
                build_query_condition_query::BuildQueryConditionQuery,
                check_permission_query::CheckPermissionQuery,
                get_scoped_record_query::GetScopedRecordQuery,
                list_scoped_records_query::ListScopedRecordsQuery,
                resolve_site_query::ResolveSiteQuery,
            },
            registry::resource_registry::{RegistryCoverageReport, ResourceRegistry},
            value_objects::{principal_id::PrincipalId, site_id::SiteId},
        },
        services::site_scope_query_service::SiteScopeQueryService,
    },
    infrastructure::persistence::repositories::{
        scoped_record_repository::{ListScopedRecordsCriteria, ScopedRecordRepository},
        site_grant_repository::SiteGrantRepository,
    },
};

pub struct SiteScopeQueryServiceImpl {
    registry: Arc<ResourceRegistry>,
    site_set_resolver: Arc<SiteSetResolver>,
    query_condition_builder: Arc<QueryConditionBuilder>,
    instance_permission_checker: Arc<InstancePermissionChecker>,
    scoped_record_repository: Arc<dyn ScopedRecordRepository>,
    site_grant_repository: Arc<dyn SiteGrantRepository>,
}

impl SiteScopeQueryServiceImpl {
    pub fn new(
        registry: Arc<ResourceRegistry>,
        site_set_resolver: Arc<SiteSetResolver>,
        query_condition_builder: Arc<QueryConditionBuilder>,
        instance_permission_checker: Arc<InstancePermissionChecker>,
        scoped_record_repository: Arc<dyn ScopedRecordRepository>,
        site_grant_repository: Arc<dyn SiteGrantRepository>,
    ) -> Self {
        Self {
            registry,
            site_set_resolver,
            query_condition_builder,
            instance_permission_checker,
            scoped_record_repository,
            site_grant_repository,
        }
    }
}

#[async_trait]
impl SiteScopeQueryService for SiteScopeQueryServiceImpl {
    async fn handle_classify_principal(
        &self,
        principal_id: &PrincipalId,
    ) -> Result<PrivilegeTier, SiteScopeDomainError> {
        Ok(self
            .site_set_resolver
            .classifier()
            .classify(principal_id)
            .await)
    }

    async fn handle_build_query_condition(
        &self,
        query: BuildQueryConditionQuery,
    ) -> Result<QueryCondition, SiteScopeDomainError> {
        let registration = self
            .registry
            .query_condition_registration(query.resource_type().value())?;

        let condition = self
            .query_condition_builder
            .build(registration, query.principal_id())
            .await?;

        debug!(
            principal = query.principal_id().value(),
            resource_type = query.resource_type().value(),
            condition = condition.kind(),
            "query condition built"
        );

        Ok(condition)
    }

    async fn handle_check_permission(
        &self,
        query: CheckPermissionQuery,
    ) -> Result<bool, SiteScopeDomainError> {
        let registration = self
            .registry
            .has_permission_registration(query.resource_type().value())?;

        self.instance_permission_checker
            .has_permission(
                registration,
                query.instance(),
                query.principal_id(),
                query.operation(),
            )
            .await
    }

    async fn handle_resolve_site(
        &self,
        query: ResolveSiteQuery,
    ) -> Result<SiteId, SiteScopeDomainError> {
        self.site_set_resolver.resolve_site(query.identifier()).await
    }

    async fn handle_allowed_sites(
        &self,
        principal_id: &PrincipalId,
    ) -> Result<AllowedSites, SiteScopeDomainError> {
        self.site_set_resolver
            .resolve_allowed_sites(principal_id)
            .await
    }

    async fn handle_has_site_permission(
        &self,
        site: Option<&str>,
        principal_id: &PrincipalId,
    ) -> Result<bool, SiteScopeDomainError> {
        self.site_set_resolver
            .has_site_permission(site, principal_id)
            .await
    }

    async fn handle_assert_site_access(
        &self,
        site: Option<&str>,
        principal_id: &PrincipalId,
    ) -> Result<(), SiteScopeDomainError> {
        self.site_set_resolver
            .assert_site_access(site, principal_id)
            .await
    }

    async fn handle_list_records(
        &self,
        query: ListScopedRecordsQuery,
    ) -> Result<Vec<ScopedRecord>, SiteScopeDomainError> {
        let registration = self
            .registry
            .query_condition_registration(query.resource_type().value())?;

        let condition = self
            .query_condition_builder
            .build(registration, query.principal_id())
            .await?;

        if condition.is_deny_all() {
            return Ok(Vec::new());
        }

        self.scoped_record_repository
            .list_records(ListScopedRecordsCriteria {
                registration: registration.clone(),
                condition,
                limit: query.limit(),
                offset: query.offset(),
            })
            .await
    }

    /// An unknown name is reported as denied unless the principal bypasses
    /// site filtering.
    async fn handle_get_record(
        &self,
        query: GetScopedRecordQuery,
    ) -> Result<ScopedRecord, SiteScopeDomainError> {
        let registration = self
            .registry
            .has_permission_registration(query.resource_type().value())?;

        let record = self
            .scoped_record_repository
            .find_record(registration, query.name())
            .await?;

        let instance = record
            .as_ref()
            .map(ScopedRecord::to_instance)
            .unwrap_or_else(|| ResourceInstance::identified(query.name()));

        let allowed = self
            .instance_permission_checker
            .has_permission(
                registration,
                Some(&instance),
                query.principal_id(),
                PermissionOperation::Read,
            )
            .await?;
        if !allowed {
            return Err(SiteScopeDomainError::AccessDenied);
        }

        record.ok_or_else(|| {
            SiteScopeDomainError::NotFound(format!(
                "{} not found: {}",
                query.resource_type().value(),
                query.name()
            ))
        })
    }

    async fn handle_list_grants(
        &self,
        principal_id: &PrincipalId,
    ) -> Result<Vec<SiteGrant>, SiteScopeDomainError> {
        self.site_grant_repository.find_grants(principal_id).await
    }

    fn handle_registry_coverage(&self) -> RegistryCoverageReport {
        self.registry.coverage_report()
    }
}
