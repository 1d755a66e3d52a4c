use site_scope_api::site_scope::domain::model::{
    entities::allowed_sites::AllowedSites, enums::privilege_tier::PrivilegeTier,
};

use crate::support::{
    ADMINISTRATOR, MANAGER, NEWCOMER, OPERATOR_A, SITE_A, create_seeded_harness, list_query,
    principal,
};

#[tokio::test]
async fn super_principal_is_unrestricted_without_grants() {
    let harness = create_seeded_harness();

    let tier = harness
        .query_service
        .handle_classify_principal(&principal(ADMINISTRATOR))
        .await
        .expect("classification");
    let allowed = harness
        .query_service
        .handle_allowed_sites(&principal(ADMINISTRATOR))
        .await
        .expect("allowed sites");

    assert_eq!(tier, PrivilegeTier::Unrestricted);
    assert_eq!(allowed, AllowedSites::Unrestricted);
}

#[tokio::test]
async fn global_role_member_bypasses_site_filtering() {
    let harness = create_seeded_harness();

    let tier = harness
        .query_service
        .handle_classify_principal(&principal(MANAGER))
        .await
        .expect("classification");
    let allowed = harness
        .query_service
        .handle_allowed_sites(&principal(MANAGER))
        .await
        .expect("allowed sites");

    assert_eq!(tier, PrivilegeTier::GlobalRole);
    assert!(allowed.is_unrestricted());
}

#[tokio::test]
async fn ordinary_principal_is_scoped_to_its_grants() {
    let harness = create_seeded_harness();

    let tier = harness
        .query_service
        .handle_classify_principal(&principal(OPERATOR_A))
        .await
        .expect("classification");
    let allowed = harness
        .query_service
        .handle_allowed_sites(&principal(OPERATOR_A))
        .await
        .expect("allowed sites");

    assert_eq!(tier, PrivilegeTier::Scoped);
    assert_eq!(AllowedSites::scoped(vec![SITE_A.to_string()]), allowed);
}

#[tokio::test]
async fn failed_role_lookup_falls_back_to_scoped() {
    let harness = create_seeded_harness();
    harness.store.fail_role_lookups();

    let tier = harness
        .query_service
        .handle_classify_principal(&principal(MANAGER))
        .await
        .expect("classification");
    let lots = harness
        .query_service
        .handle_list_records(list_query(MANAGER, "Lot"))
        .await
        .expect("listing");

    assert_eq!(tier, PrivilegeTier::Scoped);
    assert!(lots.is_empty());
}

#[tokio::test]
async fn super_principal_does_not_depend_on_role_lookup() {
    let harness = create_seeded_harness();
    harness.store.fail_role_lookups();

    let tier = harness
        .query_service
        .handle_classify_principal(&principal(ADMINISTRATOR))
        .await
        .expect("classification");

    assert_eq!(tier, PrivilegeTier::Unrestricted);
}

#[tokio::test]
async fn principal_without_grants_resolves_to_empty_scope() {
    let harness = create_seeded_harness();

    let allowed = harness
        .query_service
        .handle_allowed_sites(&principal(NEWCOMER))
        .await
        .expect("allowed sites");

    assert!(!allowed.is_unrestricted());
    assert!(allowed.is_empty());
}
