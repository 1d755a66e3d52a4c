use axum::Router;
use dotenvy::dotenv;
use site_scope_api::{
    config::app_config::AppConfig,
    site_scope::{
        build_site_scope_router,
        interfaces::rest::resources::{
            allowed_sites_response_resource::AllowedSitesResponseResource,
            assert_site_access_request_resource::AssertSiteAccessRequestResource,
            assign_role_request_resource::AssignRoleRequestResource,
            build_query_condition_request_resource::{
                BuildQueryConditionRequestResource, QueryConditionResponseResource,
            },
            check_permission_request_resource::{
                CheckPermissionRequestResource, CheckPermissionResponseResource,
                ResourceInstanceResource,
            },
            registry_coverage_response_resource::RegistryCoverageResponseResource,
            resolve_site_request_resource::{
                ResolveSiteRequestResource, ResolveSiteResponseResource,
            },
            scoped_record_resource::ScopedRecordResource,
            site_grant_request_resource::{
                GrantSiteRequestResource, RevokeSiteRequestResource,
                SiteGrantChangedResponseResource, SiteGrantResource,
            },
            site_scope_error_response_resource::SiteScopeErrorResponseResource,
        },
    },
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        site_scope_api::site_scope::interfaces::rest::controllers::site_scope_rest_controller::build_query_condition,
        site_scope_api::site_scope::interfaces::rest::controllers::site_scope_rest_controller::check_permission,
        site_scope_api::site_scope::interfaces::rest::controllers::site_scope_rest_controller::resolve_site,
        site_scope_api::site_scope::interfaces::rest::controllers::site_scope_rest_controller::assert_site_access,
        site_scope_api::site_scope::interfaces::rest::controllers::site_scope_rest_controller::get_allowed_sites,
        site_scope_api::site_scope::interfaces::rest::controllers::site_scope_rest_controller::list_records,
        site_scope_api::site_scope::interfaces::rest::controllers::site_scope_rest_controller::get_record,
        site_scope_api::site_scope::interfaces::rest::controllers::site_scope_rest_controller::grant_site,
        site_scope_api::site_scope::interfaces::rest::controllers::site_scope_rest_controller::revoke_site,
        site_scope_api::site_scope::interfaces::rest::controllers::site_scope_rest_controller::list_grants,
        site_scope_api::site_scope::interfaces::rest::controllers::site_scope_rest_controller::assign_role,
        site_scope_api::site_scope::interfaces::rest::controllers::site_scope_rest_controller::get_registry_coverage
    ),
    components(
        schemas(
            BuildQueryConditionRequestResource,
            QueryConditionResponseResource,
            CheckPermissionRequestResource,
            CheckPermissionResponseResource,
            ResourceInstanceResource,
            ResolveSiteRequestResource,
            ResolveSiteResponseResource,
            AssertSiteAccessRequestResource,
            AllowedSitesResponseResource,
            ScopedRecordResource,
            GrantSiteRequestResource,
            RevokeSiteRequestResource,
            SiteGrantChangedResponseResource,
            SiteGrantResource,
            AssignRoleRequestResource,
            RegistryCoverageResponseResource,
            SiteScopeErrorResponseResource
        )
    ),
    tags(
        (name = "site-scope", description = "Site-scoped authorization bounded context")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let site_scope_router = build_site_scope_router(&config)
        .await
        .expect("failed to build site scope router");

    let app = Router::new()
        .merge(site_scope_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!("listening on http://localhost:{}", config.port);
    info!(
        "swagger ui available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
