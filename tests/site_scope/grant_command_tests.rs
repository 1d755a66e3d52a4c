use site_scope_api::site_scope::domain::model::{
    commands::{
        assign_role_command::AssignRoleCommand, grant_site_command::GrantSiteCommand,
        revoke_site_command::RevokeSiteCommand,
    },
    entities::allowed_sites::AllowedSites,
    enums::{
        privilege_tier::PrivilegeTier, site_grant_change::SiteGrantChange,
        site_scope_domain_error::SiteScopeDomainError,
    },
};

use crate::support::{
    AGRONOMIST, NEWCOMER, OPERATOR_A, SITE_A, SITE_B, SYSTEM_MANAGER_ROLE, create_seeded_harness,
    list_query, principal,
};

fn grant(principal_id: &str, site: &str) -> GrantSiteCommand {
    GrantSiteCommand::new(principal_id.to_string(), site.to_string()).expect("valid grant")
}

fn revoke(principal_id: &str, site: &str) -> RevokeSiteCommand {
    RevokeSiteCommand::new(principal_id.to_string(), site.to_string()).expect("valid revoke")
}

#[tokio::test]
async fn granting_by_alias_stores_the_site_name() {
    let harness = create_seeded_harness();

    let event = harness
        .command_service
        .handle_grant_site(grant(NEWCOMER, "Alpha Farm"))
        .await
        .expect("grant")
        .expect("new grant");

    assert_eq!(event.site_id, SITE_A);
    assert_eq!(event.change, SiteGrantChange::Granted);
    assert_eq!(harness.store.stored_targets(NEWCOMER), vec![SITE_A.to_string()]);
}

#[tokio::test]
async fn granting_twice_is_idempotent() {
    let harness = create_seeded_harness();

    let repeated = harness
        .command_service
        .handle_grant_site(grant(OPERATOR_A, SITE_A))
        .await
        .expect("grant");

    assert!(repeated.is_none());
    assert_eq!(harness.store.stored_targets(OPERATOR_A).len(), 1);
}

#[tokio::test]
async fn granting_an_unknown_site_is_not_found() {
    let harness = create_seeded_harness();

    let result = harness
        .command_service
        .handle_grant_site(grant(NEWCOMER, "Nowhere"))
        .await;

    assert!(matches!(result, Err(SiteScopeDomainError::NotFound(_))));
    assert!(harness.store.stored_targets(NEWCOMER).is_empty());
}

#[test]
fn blank_grant_target_is_rejected() {
    let result = GrantSiteCommand::new(NEWCOMER.to_string(), "  ".to_string());

    assert!(matches!(result, Err(SiteScopeDomainError::InvalidSiteId)));
}

#[tokio::test]
async fn revocation_takes_effect_on_the_next_evaluation() {
    let harness = create_seeded_harness();

    let before = harness
        .query_service
        .handle_list_records(list_query(OPERATOR_A, "Lot"))
        .await
        .expect("listing");
    let event = harness
        .command_service
        .handle_revoke_site(revoke(OPERATOR_A, SITE_A))
        .await
        .expect("revoke");
    let after = harness
        .query_service
        .handle_list_records(list_query(OPERATOR_A, "Lot"))
        .await
        .expect("listing");
    let repeated = harness
        .command_service
        .handle_revoke_site(revoke(OPERATOR_A, SITE_A))
        .await
        .expect("revoke");

    assert_eq!(before.len(), 1);
    assert_eq!(event.map(|event| event.change), Some(SiteGrantChange::Revoked));
    assert!(after.is_empty());
    assert!(repeated.is_none());
}

#[tokio::test]
async fn grants_are_read_on_every_evaluation() {
    let harness = create_seeded_harness();
    let operator = principal(OPERATOR_A);

    for _ in 0..3 {
        harness
            .query_service
            .handle_has_site_permission(Some(SITE_A), &operator)
            .await
            .expect("site permission");
    }

    assert_eq!(harness.store.grant_reads(), 3);
}

#[tokio::test]
async fn assigning_the_global_role_lifts_site_filtering() {
    let harness = create_seeded_harness();

    harness
        .command_service
        .handle_assign_role(
            AssignRoleCommand::new(NEWCOMER.to_string(), SYSTEM_MANAGER_ROLE.to_string())
                .expect("valid role command"),
        )
        .await
        .expect("assign role");
    let tier = harness
        .query_service
        .handle_classify_principal(&principal(NEWCOMER))
        .await
        .expect("classification");

    assert_eq!(tier, PrivilegeTier::GlobalRole);
}

#[tokio::test]
async fn listed_grants_include_raw_targets() {
    let harness = create_seeded_harness();

    let grants = harness
        .query_service
        .handle_list_grants(&principal(OPERATOR_A))
        .await
        .expect("grants");

    assert_eq!(grants.len(), 1);
    assert_eq!(grants[0].target, SITE_A);
    assert_eq!(grants[0].allow_kind, "Site");
}

#[tokio::test]
async fn revoking_by_alias_removes_the_canonical_grant() {
    let harness = create_seeded_harness();
    harness
        .command_service
        .handle_grant_site(grant(NEWCOMER, "Alpha Farm"))
        .await
        .expect("grant");

    let event = harness
        .command_service
        .handle_revoke_site(revoke(NEWCOMER, "Alpha Farm"))
        .await
        .expect("revoke")
        .expect("grant removed");
    let allowed = harness
        .query_service
        .handle_allowed_sites(&principal(NEWCOMER))
        .await
        .expect("allowed sites");

    assert_eq!(event.site_id, SITE_A);
    assert_eq!(allowed, AllowedSites::scoped(Vec::new()));
    assert!(harness.store.stored_targets(NEWCOMER).is_empty());
}

#[tokio::test]
async fn revoking_removes_padded_stored_targets() {
    let harness = create_seeded_harness();

    let event = harness
        .command_service
        .handle_revoke_site(revoke(AGRONOMIST, SITE_B))
        .await
        .expect("revoke");
    let allowed = harness
        .query_service
        .handle_allowed_sites(&principal(AGRONOMIST))
        .await
        .expect("allowed sites");

    assert_eq!(event.map(|event| event.site_id), Some(SITE_B.to_string()));
    assert!(allowed.is_empty());
    assert_eq!(harness.store.stored_targets(AGRONOMIST), vec!["   ".to_string()]);
}

#[tokio::test]
async fn grants_for_removed_sites_are_still_revocable() {
    let harness = create_seeded_harness();
    harness.store.add_grant(NEWCOMER, "Site Gone");

    let event = harness
        .command_service
        .handle_revoke_site(revoke(NEWCOMER, "Site Gone"))
        .await
        .expect("revoke");

    assert!(event.is_some());
    assert!(harness.store.stored_targets(NEWCOMER).is_empty());
}
