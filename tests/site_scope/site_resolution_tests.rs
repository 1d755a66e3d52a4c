use site_scope_api::site_scope::domain::model::{
    enums::site_scope_domain_error::SiteScopeDomainError, queries::resolve_site_query::ResolveSiteQuery,
};

use crate::support::{
    ADMINISTRATOR, AGRONOMIST, MANAGER, NEWCOMER, OPERATOR_A, SITE_A, SITE_B,
    create_empty_harness, create_seeded_harness, principal,
};

async fn resolve(identifier: Option<&str>) -> Result<String, SiteScopeDomainError> {
    let harness = create_seeded_harness();
    harness
        .query_service
        .handle_resolve_site(ResolveSiteQuery::new(identifier.map(str::to_string)))
        .await
        .map(|site_id| site_id.into_inner())
}

#[tokio::test]
async fn exact_name_and_alias_resolve_to_the_site() {
    assert_eq!(resolve(Some(SITE_B)).await.expect("exact"), SITE_B);
    assert_eq!(resolve(Some("Bravo Farm")).await.expect("alias"), SITE_B);
    assert_eq!(resolve(Some("  Alpha Farm ")).await.expect("trimmed"), SITE_A);
}

#[tokio::test]
async fn missing_identifier_falls_back_to_an_existing_site() {
    assert_eq!(resolve(None).await.expect("fallback"), SITE_A);
    assert_eq!(resolve(Some("   ")).await.expect("blank fallback"), SITE_A);
}

#[tokio::test]
async fn unknown_site_is_not_found() {
    let result = resolve(Some("Nowhere")).await;

    match result {
        Err(SiteScopeDomainError::NotFound(message)) => {
            assert_eq!(message, "Site not found: Nowhere");
        }
        other => panic!("expected not found, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_directory_asks_for_a_site_to_be_created() {
    let harness = create_empty_harness();

    let result = harness
        .query_service
        .handle_resolve_site(ResolveSiteQuery::new(None))
        .await;

    match result {
        Err(SiteScopeDomainError::NotFound(message)) => {
            assert_eq!(message, "No Site records exist; create a Site first.");
        }
        other => panic!("expected not found, got {other:?}"),
    }
}

#[tokio::test]
async fn site_permission_follows_grants_and_bypass() {
    let harness = create_seeded_harness();
    let cases = [
        (OPERATOR_A, Some(SITE_A), true),
        (OPERATOR_A, Some(SITE_B), false),
        (OPERATOR_A, None, false),
        (OPERATOR_A, Some(""), false),
        (AGRONOMIST, Some(SITE_B), true),
        (NEWCOMER, Some(SITE_A), false),
        (MANAGER, Some("Site Z"), true),
        (ADMINISTRATOR, None, true),
    ];

    for (principal_id, site, expected) in cases {
        let allowed = harness
            .query_service
            .handle_has_site_permission(site, &principal(principal_id))
            .await
            .expect("site permission");

        assert_eq!(allowed, expected, "{principal_id} on {site:?}");
    }
}

#[tokio::test]
async fn assert_site_access_denies_with_a_fixed_message() {
    let harness = create_seeded_harness();

    harness
        .query_service
        .handle_assert_site_access(Some(SITE_A), &principal(OPERATOR_A))
        .await
        .expect("own site");
    let denied = harness
        .query_service
        .handle_assert_site_access(Some(SITE_B), &principal(OPERATOR_A))
        .await;

    match denied {
        Err(error @ SiteScopeDomainError::AccessDenied) => {
            assert_eq!(error.to_string(), "Not permitted for this Site");
        }
        other => panic!("expected access denied, got {other:?}"),
    }
}
