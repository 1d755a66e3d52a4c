use site_scope_api::site_scope::domain::model::{
    entities::resource_instance::ResourceInstance,
    queries::{
        build_query_condition_query::BuildQueryConditionQuery,
        check_permission_query::{CheckPermissionQuery, CheckPermissionQueryParts},
        list_scoped_records_query::{ListScopedRecordsQuery, ListScopedRecordsQueryParts},
    },
    value_objects::principal_id::PrincipalId,
};

use super::fakes::FakeSiteScopeStore;

pub const ADMINISTRATOR: &str = "Administrator";
pub const SYSTEM_MANAGER_ROLE: &str = "System Manager";
pub const MANAGER: &str = "manager@yam.test";
pub const OPERATOR_A: &str = "operator.a@yam.test";
pub const OPERATOR_B: &str = "operator.b@yam.test";
pub const AGRONOMIST: &str = "agronomist@yam.test";
pub const NEWCOMER: &str = "newcomer@yam.test";

pub const SITE_A: &str = "Site A";
pub const SITE_B: &str = "Site B";
pub const SITE_C: &str = "Site C";
pub const SITE_D: &str = "Site D";

pub const FIELD_A: &str = "Field A1";
pub const FIELD_B: &str = "Field B1";
pub const FIELD_C: &str = "Field C1";
pub const FIELD_D: &str = "Field D1";
pub const FIELD_ORPHAN: &str = "Field Orphan";

pub const LOT_A: &str = "LOT-A-0001";
pub const LOT_B: &str = "LOT-B-0001";
pub const LOT_UNASSIGNED: &str = "LOT-X-0001";
pub const WEATHER_A: &str = "WX-A1";
pub const WEATHER_B: &str = "WX-B1";
pub const WEATHER_ORPHAN: &str = "WX-ORPHAN";
pub const CROP_CYCLE_ABC: &str = "CC-2026-ABC";
pub const CROP_CYCLE_D: &str = "CC-2026-D";
pub const CROP_CYCLE_UNLINKED: &str = "CC-2026-NONE";

pub const CROP_CYCLE: &str = "Crop Cycle";

/// Four sites with one field each, plus records of every shape.
///
/// `OPERATOR_A` holds Site A, `OPERATOR_B` holds Site B, `AGRONOMIST` holds
/// Site B and a blank grant, `MANAGER` holds the global role and no grants.
pub fn seed_yam_world(store: &FakeSiteScopeStore) {
    store.add_site(SITE_A, Some("Alpha Farm"));
    store.add_site(SITE_B, Some("Bravo Farm"));
    store.add_site(SITE_C, None);
    store.add_site(SITE_D, None);

    store.add_location(FIELD_A, Some(SITE_A));
    store.add_location(FIELD_B, Some(SITE_B));
    store.add_location(FIELD_C, Some(SITE_C));
    store.add_location(FIELD_D, Some(SITE_D));
    store.add_location(FIELD_ORPHAN, None);

    store.add_row("lots", LOT_A, &[("site", SITE_A)]);
    store.add_row("lots", LOT_B, &[("site", SITE_B)]);
    store.add_row("lots", LOT_UNASSIGNED, &[]);
    store.add_row("qc_tests", "QC-A-1", &[("site", SITE_A)]);
    store.add_row("devices", "DEV-B-1", &[("site", SITE_B)]);

    store.add_row("weather", WEATHER_A, &[("location", FIELD_A)]);
    store.add_row("weather", WEATHER_B, &[("location", FIELD_B)]);
    store.add_row("weather", WEATHER_ORPHAN, &[("location", FIELD_ORPHAN)]);

    store.add_row("crop_cycles", CROP_CYCLE_ABC, &[]);
    store.add_link(CROP_CYCLE_ABC, CROP_CYCLE, FIELD_A);
    store.add_link(CROP_CYCLE_ABC, CROP_CYCLE, FIELD_B);
    store.add_link(CROP_CYCLE_ABC, CROP_CYCLE, FIELD_C);
    store.add_row("crop_cycles", CROP_CYCLE_D, &[]);
    store.add_link(CROP_CYCLE_D, CROP_CYCLE, FIELD_D);
    store.add_row("crop_cycles", CROP_CYCLE_UNLINKED, &[]);

    store.add_grant(OPERATOR_A, SITE_A);
    store.add_grant(OPERATOR_B, SITE_B);
    store.add_grant(AGRONOMIST, " Site B ");
    store.add_grant(AGRONOMIST, "   ");
    store.add_role(MANAGER, SYSTEM_MANAGER_ROLE);
}

pub fn principal(value: &str) -> PrincipalId {
    PrincipalId::new(value.to_string()).expect("valid principal")
}

pub fn build_query(principal_id: &str, resource_type: &str) -> BuildQueryConditionQuery {
    BuildQueryConditionQuery::new(principal_id.to_string(), resource_type.to_string())
        .expect("valid build query")
}

pub fn check_query(
    principal_id: &str,
    resource_type: &str,
    instance: Option<ResourceInstance>,
) -> CheckPermissionQuery {
    CheckPermissionQuery::new(CheckPermissionQueryParts {
        principal_id: principal_id.to_string(),
        resource_type: resource_type.to_string(),
        instance,
        operation: "read".to_string(),
    })
    .expect("valid check query")
}

pub fn list_query(principal_id: &str, resource_type: &str) -> ListScopedRecordsQuery {
    ListScopedRecordsQuery::new(ListScopedRecordsQueryParts {
        principal_id: principal_id.to_string(),
        resource_type: resource_type.to_string(),
        limit: 500,
        offset: 0,
    })
    .expect("valid list query")
}
