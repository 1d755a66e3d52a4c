use std::sync::Arc;

use async_trait::async_trait;

use crate::site_scope::{
    domain::{
        model::{
            enums::site_scope_domain_error::SiteScopeDomainError,
            queries::check_permission_query::{CheckPermissionQuery, CheckPermissionQueryParts},
            value_objects::principal_id::PrincipalId,
        },
        services::site_scope_query_service::SiteScopeQueryService,
    },
    interfaces::acl::site_access_facade::{SiteAccessFacade, SiteAccessRequest},
};

pub struct SiteAccessFacadeImpl {
    query_service: Arc<dyn SiteScopeQueryService>,
}

impl SiteAccessFacadeImpl {
    pub fn new(query_service: Arc<dyn SiteScopeQueryService>) -> Self {
        Self { query_service }
    }
}

#[async_trait]
impl SiteAccessFacade for SiteAccessFacadeImpl {
    async fn can_access(&self, request: SiteAccessRequest) -> Result<bool, SiteScopeDomainError> {
        let query = CheckPermissionQuery::new(CheckPermissionQueryParts {
            principal_id: request.principal_id,
            resource_type: request.resource_type,
            instance: request.instance,
            operation: request.operation,
        })?;

        self.query_service.handle_check_permission(query).await
    }

    async fn ensure_can_access(
        &self,
        request: SiteAccessRequest,
    ) -> Result<(), SiteScopeDomainError> {
        if self.can_access(request).await? {
            Ok(())
        } else {
            Err(SiteScopeDomainError::AccessDenied)
        }
    }

    async fn ensure_can_write_site(
        &self,
        principal_id: String,
        site: Option<String>,
    ) -> Result<(), SiteScopeDomainError> {
        let site = site
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(SiteScopeDomainError::MissingSite)?;
        let principal_id = PrincipalId::new(principal_id)?;

        self.query_service
            .handle_assert_site_access(Some(&site), &principal_id)
            .await
    }
}
