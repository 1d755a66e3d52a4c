use std::sync::Arc;

use axum::Router;
use sqlx::{PgPool, migrate};
use tracing::{info, warn};

use crate::{
    config::app_config::AppConfig,
    site_scope::{
        application::{
            acl::site_access_facade_impl::SiteAccessFacadeImpl,
            command_services::site_grant_command_service_impl::SiteGrantCommandServiceImpl,
            query_services::{
                instance_permission_checker::InstancePermissionChecker,
                query_condition_builder::QueryConditionBuilder,
                site_scope_query_service_impl::SiteScopeQueryServiceImpl,
            },
            resolvers::{
                bridge_resolver::BridgeResolver,
                privilege_classifier::{PrivilegeClassifier, PrivilegeSettings},
                site_set_resolver::SiteSetResolver,
            },
        },
        domain::{
            model::registry::{
                default_resource_catalog::default_resource_catalog,
                resource_registry::ResourceRegistry,
            },
            services::{
                site_grant_command_service::SiteGrantCommandService,
                site_scope_query_service::SiteScopeQueryService,
            },
        },
        infrastructure::persistence::repositories::{
            linked_location_repository::LinkedLocationRepository,
            location_directory_repository::LocationDirectoryRepository,
            postgres::{
                sqlx_linked_location_repository_impl::SqlxLinkedLocationRepositoryImpl,
                sqlx_location_directory_repository_impl::SqlxLocationDirectoryRepositoryImpl,
                sqlx_role_membership_repository_impl::SqlxRoleMembershipRepositoryImpl,
                sqlx_scoped_record_repository_impl::SqlxScopedRecordRepositoryImpl,
                sqlx_site_directory_repository_impl::SqlxSiteDirectoryRepositoryImpl,
                sqlx_site_grant_repository_impl::SqlxSiteGrantRepositoryImpl,
            },
            role_membership_repository::RoleMembershipRepository,
            scoped_record_repository::ScopedRecordRepository,
            site_directory_repository::SiteDirectoryRepository,
            site_grant_repository::SiteGrantRepository,
        },
        interfaces::{
            acl::site_access_facade::SiteAccessFacade,
            rest::controllers::site_scope_rest_controller::{SiteScopeRestControllerState, router},
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

#[derive(Clone)]
pub struct SiteScopeRepositories {
    pub site_grants: Arc<dyn SiteGrantRepository>,
    pub role_memberships: Arc<dyn RoleMembershipRepository>,
    pub site_directory: Arc<dyn SiteDirectoryRepository>,
    pub location_directory: Arc<dyn LocationDirectoryRepository>,
    pub linked_locations: Arc<dyn LinkedLocationRepository>,
    pub scoped_records: Arc<dyn ScopedRecordRepository>,
}

impl SiteScopeRepositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            site_grants: Arc::new(SqlxSiteGrantRepositoryImpl::new(pool.clone())),
            role_memberships: Arc::new(SqlxRoleMembershipRepositoryImpl::new(pool.clone())),
            site_directory: Arc::new(SqlxSiteDirectoryRepositoryImpl::new(pool.clone())),
            location_directory: Arc::new(SqlxLocationDirectoryRepositoryImpl::new(pool.clone())),
            linked_locations: Arc::new(SqlxLinkedLocationRepositoryImpl::new(pool.clone())),
            scoped_records: Arc::new(SqlxScopedRecordRepositoryImpl::new(pool)),
        }
    }
}

#[derive(Clone)]
pub struct SiteScopeServices {
    pub query_service: Arc<dyn SiteScopeQueryService>,
    pub command_service: Arc<dyn SiteGrantCommandService>,
    pub site_access_facade: Arc<dyn SiteAccessFacade>,
}

pub fn assemble_site_scope(
    repositories: SiteScopeRepositories,
    registry: ResourceRegistry,
    settings: PrivilegeSettings,
) -> SiteScopeServices {
    let classifier = Arc::new(PrivilegeClassifier::new(
        repositories.role_memberships.clone(),
        settings,
    ));
    let site_set_resolver = Arc::new(SiteSetResolver::new(
        classifier,
        repositories.site_grants.clone(),
        repositories.site_directory.clone(),
    ));
    let bridge_resolver = Arc::new(BridgeResolver::new(
        repositories.location_directory.clone(),
        repositories.linked_locations.clone(),
    ));

    let query_condition_builder = Arc::new(QueryConditionBuilder::new(
        site_set_resolver.clone(),
        bridge_resolver.clone(),
    ));
    let instance_permission_checker = Arc::new(InstancePermissionChecker::new(
        site_set_resolver.clone(),
        bridge_resolver,
        repositories.scoped_records.clone(),
    ));

    let query_service: Arc<dyn SiteScopeQueryService> = Arc::new(SiteScopeQueryServiceImpl::new(
        Arc::new(registry),
        site_set_resolver.clone(),
        query_condition_builder,
        instance_permission_checker,
        repositories.scoped_records,
        repositories.site_grants.clone(),
    ));
    let command_service = Arc::new(SiteGrantCommandServiceImpl::new(
        site_set_resolver,
        repositories.site_grants,
        repositories.role_memberships,
    ));
    let site_access_facade = Arc::new(SiteAccessFacadeImpl::new(query_service.clone()));

    SiteScopeServices {
        query_service,
        command_service,
        site_access_facade,
    }
}

pub async fn build_site_scope_router(config: &AppConfig) -> Result<Router, String> {
    let registry = default_resource_catalog();
    let report = registry.coverage_report();
    if !report.is_complete() {
        for defect in &report.defects {
            warn!(defect = %defect, "resource registry defect");
        }
    }
    registry.verify_coverage().map_err(|e| e.to_string())?;

    let pool = PgPool::connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    if config.run_migrations {
        migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| e.to_string())?;
    }

    info!(
        resource_types = report.resource_types.len(),
        super_principal = %config.super_principal,
        global_role = %config.global_role,
        "site scope registry verified"
    );

    let services = assemble_site_scope(
        SiteScopeRepositories::postgres(pool),
        registry,
        PrivilegeSettings {
            super_principal: config.super_principal.clone(),
            global_role: config.global_role.clone(),
        },
    );

    Ok(router(SiteScopeRestControllerState {
        query_service: services.query_service,
        command_service: services.command_service,
    }))
}
