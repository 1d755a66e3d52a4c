use std::collections::BTreeSet;

use site_scope_api::site_scope::domain::model::entities::resource_instance::ResourceInstance;

use crate::support::{
    ADMINISTRATOR, AGRONOMIST, CROP_CYCLE, CROP_CYCLE_ABC, CROP_CYCLE_D, MANAGER, NEWCOMER,
    OPERATOR_A, OPERATOR_B, SITE_D, check_query, create_seeded_harness, list_query,
};

const RESOURCE_TABLES: [(&str, &str); 7] = [
    ("Lot", "lots"),
    ("QCTest", "qc_tests"),
    ("Device", "devices"),
    ("Site", "sites"),
    ("Location", "locations"),
    ("Weather", "weather"),
    (CROP_CYCLE, "crop_cycles"),
];

const SITE_D_HOLDER: &str = "holder.d@yam.test";

#[tokio::test]
async fn listing_and_instance_check_agree_for_every_principal_and_type() {
    let harness = create_seeded_harness();
    harness.store.add_grant(SITE_D_HOLDER, SITE_D);

    let principals = [
        ADMINISTRATOR,
        MANAGER,
        OPERATOR_A,
        OPERATOR_B,
        AGRONOMIST,
        NEWCOMER,
        SITE_D_HOLDER,
    ];

    for principal_id in principals {
        for (resource_type, table) in RESOURCE_TABLES {
            let listed = harness
                .query_service
                .handle_list_records(list_query(principal_id, resource_type))
                .await
                .expect("listing")
                .into_iter()
                .map(|record| record.name)
                .collect::<BTreeSet<_>>();

            let mut checked = BTreeSet::new();
            for name in harness.store.row_names(table) {
                let allowed = harness
                    .query_service
                    .handle_check_permission(check_query(
                        principal_id,
                        resource_type,
                        Some(ResourceInstance::identified(&name)),
                    ))
                    .await
                    .expect("permission decision");
                if allowed {
                    checked.insert(name);
                }
            }

            assert_eq!(listed, checked, "{principal_id} on {resource_type}");
        }
    }
}

#[tokio::test]
async fn aggregate_listing_matches_any_linked_site() {
    let harness = create_seeded_harness();
    harness.store.add_grant(SITE_D_HOLDER, SITE_D);

    let for_site_b = harness
        .query_service
        .handle_list_records(list_query(OPERATOR_B, CROP_CYCLE))
        .await
        .expect("listing");
    let for_site_d = harness
        .query_service
        .handle_list_records(list_query(SITE_D_HOLDER, CROP_CYCLE))
        .await
        .expect("listing");

    assert_eq!(
        for_site_b.iter().map(|record| record.name.as_str()).collect::<Vec<_>>(),
        vec![CROP_CYCLE_ABC]
    );
    assert_eq!(
        for_site_d.iter().map(|record| record.name.as_str()).collect::<Vec<_>>(),
        vec![CROP_CYCLE_D]
    );
}
