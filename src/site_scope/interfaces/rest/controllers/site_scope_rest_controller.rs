use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use validator::{Validate, ValidationErrors};

use crate::site_scope::{
    domain::{
        model::{
            commands::{
                assign_role_command::AssignRoleCommand, grant_site_command::GrantSiteCommand,
                revoke_site_command::RevokeSiteCommand,
            },
            entities::{allowed_sites::AllowedSites, resource_instance::ResourceInstance},
            enums::site_scope_domain_error::SiteScopeDomainError,
            events::site_grant_changed_event::SiteGrantChangedEvent,
            queries::{
                build_query_condition_query::BuildQueryConditionQuery,
                check_permission_query::{CheckPermissionQuery, CheckPermissionQueryParts},
                get_scoped_record_query::GetScopedRecordQuery,
                list_scoped_records_query::{ListScopedRecordsQuery, ListScopedRecordsQueryParts},
                resolve_site_query::ResolveSiteQuery,
            },
            value_objects::principal_id::PrincipalId,
        },
        services::{
            site_grant_command_service::SiteGrantCommandService,
            site_scope_query_service::SiteScopeQueryService,
        },
    },
    interfaces::rest::resources::{
        allowed_sites_response_resource::AllowedSitesResponseResource,
        assert_site_access_request_resource::AssertSiteAccessRequestResource,
        assign_role_request_resource::AssignRoleRequestResource,
        build_query_condition_request_resource::{
            BuildQueryConditionRequestResource, QueryConditionResponseResource,
        },
        check_permission_request_resource::{
            CheckPermissionRequestResource, CheckPermissionResponseResource,
        },
        registry_coverage_response_resource::RegistryCoverageResponseResource,
        resolve_site_request_resource::{ResolveSiteRequestResource, ResolveSiteResponseResource},
        scoped_record_resource::{
            GetScopedRecordParamsResource, ListScopedRecordsParamsResource, ScopedRecordResource,
        },
        site_grant_request_resource::{
            GrantSiteRequestResource, RevokeSiteRequestResource, SiteGrantChangedResponseResource,
            SiteGrantResource,
        },
        site_scope_error_response_resource::SiteScopeErrorResponseResource,
    },
};

const DEFAULT_PAGE_SIZE: i64 = 50;

type ErrorResponse = (StatusCode, Json<SiteScopeErrorResponseResource>);

#[derive(Clone)]
pub struct SiteScopeRestControllerState {
    pub query_service: Arc<dyn SiteScopeQueryService>,
    pub command_service: Arc<dyn SiteGrantCommandService>,
}

pub fn router(state: SiteScopeRestControllerState) -> Router {
    Router::new()
        .route(
            "/site-scope/query-conditions/build",
            post(build_query_condition),
        )
        .route("/site-scope/permissions/check", post(check_permission))
        .route("/site-scope/sites/resolve", post(resolve_site))
        .route("/site-scope/sites/assert-access", post(assert_site_access))
        .route(
            "/site-scope/principals/:principal_id/allowed-sites",
            get(get_allowed_sites),
        )
        .route("/site-scope/records/:resource_type", get(list_records))
        .route("/site-scope/records/:resource_type/:name", get(get_record))
        .route("/site-scope/grants", post(grant_site))
        .route("/site-scope/grants/revoke", post(revoke_site))
        .route("/site-scope/grants/:principal_id", get(list_grants))
        .route("/site-scope/roles/assign", post(assign_role))
        .route("/site-scope/registry/coverage", get(get_registry_coverage))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/site-scope/query-conditions/build",
    tag = "site-scope",
    request_body = BuildQueryConditionRequestResource,
    responses(
        (status = 200, description = "Listing filter for the principal", body = QueryConditionResponseResource),
        (status = 400, description = "Invalid request", body = SiteScopeErrorResponseResource),
        (status = 404, description = "Unknown resource type", body = SiteScopeErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = SiteScopeErrorResponseResource)
    )
)]
pub async fn build_query_condition(
    State(state): State<SiteScopeRestControllerState>,
    Json(request): Json<BuildQueryConditionRequestResource>,
) -> Result<Json<QueryConditionResponseResource>, ErrorResponse> {
    request.validate().map_err(map_validation_error)?;

    let query = BuildQueryConditionQuery::new(request.principal_id, request.resource_type)
        .map_err(map_domain_error)?;

    let condition = state
        .query_service
        .handle_build_query_condition(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(QueryConditionResponseResource {
        kind: condition.kind().to_string(),
        sql: condition.to_sql_text(),
        values: condition.values().to_vec(),
    }))
}

#[utoipa::path(
    post,
    path = "/site-scope/permissions/check",
    tag = "site-scope",
    request_body = CheckPermissionRequestResource,
    responses(
        (status = 200, description = "Permission decision", body = CheckPermissionResponseResource),
        (status = 400, description = "Invalid request", body = SiteScopeErrorResponseResource),
        (status = 404, description = "Unknown resource type", body = SiteScopeErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = SiteScopeErrorResponseResource)
    )
)]
pub async fn check_permission(
    State(state): State<SiteScopeRestControllerState>,
    Json(request): Json<CheckPermissionRequestResource>,
) -> Result<Json<CheckPermissionResponseResource>, ErrorResponse> {
    request.validate().map_err(map_validation_error)?;

    let query = CheckPermissionQuery::new(CheckPermissionQueryParts {
        principal_id: request.principal_id,
        resource_type: request.resource_type,
        instance: request
            .instance
            .map(|instance| ResourceInstance::new(instance.name, instance.site, instance.location)),
        operation: request.operation.unwrap_or_else(|| "read".to_string()),
    })
    .map_err(map_domain_error)?;

    let allowed = state
        .query_service
        .handle_check_permission(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(CheckPermissionResponseResource { allowed }))
}

#[utoipa::path(
    post,
    path = "/site-scope/sites/resolve",
    tag = "site-scope",
    request_body = ResolveSiteRequestResource,
    responses(
        (status = 200, description = "Canonical site id", body = ResolveSiteResponseResource),
        (status = 400, description = "Invalid request", body = SiteScopeErrorResponseResource),
        (status = 404, description = "Site not found", body = SiteScopeErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = SiteScopeErrorResponseResource)
    )
)]
pub async fn resolve_site(
    State(state): State<SiteScopeRestControllerState>,
    Json(request): Json<ResolveSiteRequestResource>,
) -> Result<Json<ResolveSiteResponseResource>, ErrorResponse> {
    request.validate().map_err(map_validation_error)?;

    let site_id = state
        .query_service
        .handle_resolve_site(ResolveSiteQuery::new(request.site))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ResolveSiteResponseResource {
        site_id: site_id.into_inner(),
    }))
}

#[utoipa::path(
    post,
    path = "/site-scope/sites/assert-access",
    tag = "site-scope",
    request_body = AssertSiteAccessRequestResource,
    responses(
        (status = 204, description = "Principal holds the site"),
        (status = 400, description = "Invalid request", body = SiteScopeErrorResponseResource),
        (status = 403, description = "Not permitted for this Site", body = SiteScopeErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = SiteScopeErrorResponseResource)
    )
)]
pub async fn assert_site_access(
    State(state): State<SiteScopeRestControllerState>,
    Json(request): Json<AssertSiteAccessRequestResource>,
) -> Result<StatusCode, ErrorResponse> {
    request.validate().map_err(map_validation_error)?;

    let principal_id = PrincipalId::new(request.principal_id).map_err(map_domain_error)?;

    state
        .query_service
        .handle_assert_site_access(request.site.as_deref(), &principal_id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/site-scope/principals/{principal_id}/allowed-sites",
    tag = "site-scope",
    params(
        ("principal_id" = String, Path, description = "Principal identity")
    ),
    responses(
        (status = 200, description = "Sites the principal may see", body = AllowedSitesResponseResource),
        (status = 400, description = "Invalid request", body = SiteScopeErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = SiteScopeErrorResponseResource)
    )
)]
pub async fn get_allowed_sites(
    State(state): State<SiteScopeRestControllerState>,
    Path(principal_id): Path<String>,
) -> Result<Json<AllowedSitesResponseResource>, ErrorResponse> {
    let principal_id = PrincipalId::new(principal_id).map_err(map_domain_error)?;

    let tier = state
        .query_service
        .handle_classify_principal(&principal_id)
        .await
        .map_err(map_domain_error)?;
    let allowed = state
        .query_service
        .handle_allowed_sites(&principal_id)
        .await
        .map_err(map_domain_error)?;

    let (unrestricted, sites) = match allowed {
        AllowedSites::Unrestricted => (true, Vec::new()),
        AllowedSites::Scoped(sites) => (false, sites.into_iter().collect()),
    };

    Ok(Json(AllowedSitesResponseResource {
        principal_id: principal_id.value().to_string(),
        privilege_tier: tier.as_str().to_string(),
        unrestricted,
        sites,
    }))
}

#[utoipa::path(
    get,
    path = "/site-scope/records/{resource_type}",
    tag = "site-scope",
    params(
        ("resource_type" = String, Path, description = "Registered resource type"),
        ListScopedRecordsParamsResource
    ),
    responses(
        (status = 200, description = "Records visible to the principal", body = [ScopedRecordResource]),
        (status = 400, description = "Invalid request", body = SiteScopeErrorResponseResource),
        (status = 404, description = "Unknown resource type", body = SiteScopeErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = SiteScopeErrorResponseResource)
    )
)]
pub async fn list_records(
    State(state): State<SiteScopeRestControllerState>,
    Path(resource_type): Path<String>,
    Query(params): Query<ListScopedRecordsParamsResource>,
) -> Result<Json<Vec<ScopedRecordResource>>, ErrorResponse> {
    params.validate().map_err(map_validation_error)?;

    let query = ListScopedRecordsQuery::new(ListScopedRecordsQueryParts {
        principal_id: params.principal_id,
        resource_type,
        limit: params.limit.unwrap_or(DEFAULT_PAGE_SIZE),
        offset: params.offset.unwrap_or(0),
    })
    .map_err(map_domain_error)?;

    let records = state
        .query_service
        .handle_list_records(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        records
            .into_iter()
            .map(|record| ScopedRecordResource {
                resource_type: record.resource_type,
                name: record.name,
                site: record.site,
                location: record.location,
            })
            .collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/site-scope/records/{resource_type}/{name}",
    tag = "site-scope",
    params(
        ("resource_type" = String, Path, description = "Registered resource type"),
        ("name" = String, Path, description = "Record name"),
        GetScopedRecordParamsResource
    ),
    responses(
        (status = 200, description = "Record", body = ScopedRecordResource),
        (status = 400, description = "Invalid request", body = SiteScopeErrorResponseResource),
        (status = 403, description = "Not permitted for this Site", body = SiteScopeErrorResponseResource),
        (status = 404, description = "Record or resource type not found", body = SiteScopeErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = SiteScopeErrorResponseResource)
    )
)]
pub async fn get_record(
    State(state): State<SiteScopeRestControllerState>,
    Path((resource_type, name)): Path<(String, String)>,
    Query(params): Query<GetScopedRecordParamsResource>,
) -> Result<Json<ScopedRecordResource>, ErrorResponse> {
    params.validate().map_err(map_validation_error)?;

    let query = GetScopedRecordQuery::new(params.principal_id, resource_type, name)
        .map_err(map_domain_error)?;

    let record = state
        .query_service
        .handle_get_record(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ScopedRecordResource {
        resource_type: record.resource_type,
        name: record.name,
        site: record.site,
        location: record.location,
    }))
}

#[utoipa::path(
    post,
    path = "/site-scope/grants",
    tag = "site-scope",
    request_body = GrantSiteRequestResource,
    responses(
        (status = 200, description = "Grant stored", body = SiteGrantChangedResponseResource),
        (status = 400, description = "Invalid request", body = SiteScopeErrorResponseResource),
        (status = 404, description = "Site not found", body = SiteScopeErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = SiteScopeErrorResponseResource)
    )
)]
pub async fn grant_site(
    State(state): State<SiteScopeRestControllerState>,
    Json(request): Json<GrantSiteRequestResource>,
) -> Result<Json<SiteGrantChangedResponseResource>, ErrorResponse> {
    request.validate().map_err(map_validation_error)?;

    let command =
        GrantSiteCommand::new(request.principal_id, request.site).map_err(map_domain_error)?;

    let event = state
        .command_service
        .handle_grant_site(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(grant_changed_response(event)))
}

#[utoipa::path(
    post,
    path = "/site-scope/grants/revoke",
    tag = "site-scope",
    request_body = RevokeSiteRequestResource,
    responses(
        (status = 200, description = "Grant removed", body = SiteGrantChangedResponseResource),
        (status = 400, description = "Invalid request", body = SiteScopeErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = SiteScopeErrorResponseResource)
    )
)]
pub async fn revoke_site(
    State(state): State<SiteScopeRestControllerState>,
    Json(request): Json<RevokeSiteRequestResource>,
) -> Result<Json<SiteGrantChangedResponseResource>, ErrorResponse> {
    request.validate().map_err(map_validation_error)?;

    let command =
        RevokeSiteCommand::new(request.principal_id, request.site_id).map_err(map_domain_error)?;

    let event = state
        .command_service
        .handle_revoke_site(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(grant_changed_response(event)))
}

#[utoipa::path(
    get,
    path = "/site-scope/grants/{principal_id}",
    tag = "site-scope",
    params(
        ("principal_id" = String, Path, description = "Principal identity")
    ),
    responses(
        (status = 200, description = "Stored grants", body = [SiteGrantResource]),
        (status = 400, description = "Invalid request", body = SiteScopeErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = SiteScopeErrorResponseResource)
    )
)]
pub async fn list_grants(
    State(state): State<SiteScopeRestControllerState>,
    Path(principal_id): Path<String>,
) -> Result<Json<Vec<SiteGrantResource>>, ErrorResponse> {
    let principal_id = PrincipalId::new(principal_id).map_err(map_domain_error)?;

    let grants = state
        .query_service
        .handle_list_grants(&principal_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        grants
            .into_iter()
            .map(|grant| SiteGrantResource {
                id: grant.id,
                principal_id: grant.principal_id,
                allow_kind: grant.allow_kind,
                target: grant.target,
                granted_at: grant.granted_at,
            })
            .collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/site-scope/roles/assign",
    tag = "site-scope",
    request_body = AssignRoleRequestResource,
    responses(
        (status = 204, description = "Role assigned"),
        (status = 400, description = "Invalid request", body = SiteScopeErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = SiteScopeErrorResponseResource)
    )
)]
pub async fn assign_role(
    State(state): State<SiteScopeRestControllerState>,
    Json(request): Json<AssignRoleRequestResource>,
) -> Result<StatusCode, ErrorResponse> {
    request.validate().map_err(map_validation_error)?;

    let command =
        AssignRoleCommand::new(request.principal_id, request.role_name).map_err(map_domain_error)?;

    state
        .command_service
        .handle_assign_role(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/site-scope/registry/coverage",
    tag = "site-scope",
    responses(
        (status = 200, description = "Registration coverage", body = RegistryCoverageResponseResource)
    )
)]
pub async fn get_registry_coverage(
    State(state): State<SiteScopeRestControllerState>,
) -> Json<RegistryCoverageResponseResource> {
    let report = state.query_service.handle_registry_coverage();

    Json(RegistryCoverageResponseResource {
        complete: report.is_complete(),
        resource_types: report.resource_types,
        defects: report.defects,
    })
}

fn grant_changed_response(event: Option<SiteGrantChangedEvent>) -> SiteGrantChangedResponseResource {
    match event {
        Some(event) => SiteGrantChangedResponseResource {
            changed: true,
            event_id: Some(event.event_id),
            change: Some(event.change.as_str().to_string()),
            site_id: Some(event.site_id),
            occurred_at: Some(event.occurred_at),
        },
        None => SiteGrantChangedResponseResource {
            changed: false,
            event_id: None,
            change: None,
            site_id: None,
            occurred_at: None,
        },
    }
}

fn map_validation_error(error: ValidationErrors) -> ErrorResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(SiteScopeErrorResponseResource {
            message: error.to_string(),
        }),
    )
}

pub fn map_domain_error(error: SiteScopeDomainError) -> ErrorResponse {
    let status = match &error {
        SiteScopeDomainError::InvalidPrincipalId
        | SiteScopeDomainError::InvalidSiteId
        | SiteScopeDomainError::InvalidRoleName
        | SiteScopeDomainError::InvalidResourceType
        | SiteScopeDomainError::InvalidOperation
        | SiteScopeDomainError::InvalidIdentifier(_)
        | SiteScopeDomainError::InvalidQueryParameters
        | SiteScopeDomainError::MissingSite => StatusCode::BAD_REQUEST,
        SiteScopeDomainError::AccessDenied => StatusCode::FORBIDDEN,
        SiteScopeDomainError::NotFound(_) | SiteScopeDomainError::UnknownResourceType(_) => {
            StatusCode::NOT_FOUND
        }
        SiteScopeDomainError::Misconfigured(_) | SiteScopeDomainError::InfrastructureError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(SiteScopeErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
