use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Mutex,
};

use async_trait::async_trait;
use site_scope_api::site_scope::{
    domain::model::{
        entities::{
            resource_registration::ResourceRegistration, scoped_record::ScopedRecord,
            site_grant::{SITE_ALLOW_KIND, SiteGrant},
        },
        enums::{
            resource_shape::{AggregateLink, ResourceShape},
            site_scope_domain_error::SiteScopeDomainError,
        },
        predicates::query_condition::ScopedRow,
        value_objects::{principal_id::PrincipalId, role_name::RoleName, site_id::SiteId},
    },
    infrastructure::persistence::repositories::{
        linked_location_repository::LinkedLocationRepository,
        location_directory_repository::LocationDirectoryRepository,
        role_membership_repository::RoleMembershipRepository,
        scoped_record_repository::{ListScopedRecordsCriteria, ScopedRecordRepository},
        site_directory_repository::SiteDirectoryRepository,
        site_grant_repository::SiteGrantRepository,
    },
};

#[derive(Clone, Debug)]
struct StoredRow {
    name: String,
    columns: BTreeMap<String, String>,
}

#[derive(Clone, Debug)]
struct StoredLink {
    parent: String,
    parent_type: String,
    location: String,
}

#[derive(Default)]
struct FakeSiteScopeState {
    site_aliases: BTreeMap<String, Option<String>>,
    location_sites: BTreeMap<String, Option<String>>,
    grants: Vec<SiteGrant>,
    roles: BTreeMap<String, Vec<String>>,
    links: Vec<StoredLink>,
    tables: BTreeMap<String, Vec<StoredRow>>,
    fail_role_lookup: bool,
    grant_reads: usize,
    list_calls: usize,
}

/// In-memory stand-in for every persistence port of the site scope context.
pub struct FakeSiteScopeStore {
    state: Mutex<FakeSiteScopeState>,
}

impl FakeSiteScopeStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeSiteScopeState::default()),
        }
    }

    pub fn add_site(&self, name: &str, alias: Option<&str>) {
        let mut state = self.state.lock().expect("mutex poisoned");
        state
            .site_aliases
            .insert(name.to_string(), alias.map(str::to_string));
        state.tables.entry("sites".to_string()).or_default().push(StoredRow {
            name: name.to_string(),
            columns: BTreeMap::new(),
        });
    }

    pub fn add_location(&self, name: &str, site: Option<&str>) {
        let mut state = self.state.lock().expect("mutex poisoned");
        state
            .location_sites
            .insert(name.to_string(), site.map(str::to_string));
        let columns = site
            .map(|site| BTreeMap::from([("site".to_string(), site.to_string())]))
            .unwrap_or_default();
        state
            .tables
            .entry("locations".to_string())
            .or_default()
            .push(StoredRow {
                name: name.to_string(),
                columns,
            });
    }

    /// Adds a row to `table`; `columns` holds every non-key column.
    pub fn add_row(&self, table: &str, name: &str, columns: &[(&str, &str)]) {
        let mut state = self.state.lock().expect("mutex poisoned");
        state
            .tables
            .entry(table.to_string())
            .or_default()
            .push(StoredRow {
                name: name.to_string(),
                columns: columns
                    .iter()
                    .map(|(column, value)| (column.to_string(), value.to_string()))
                    .collect(),
            });
    }

    pub fn add_link(&self, parent: &str, parent_type: &str, location: &str) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .links
            .push(StoredLink {
                parent: parent.to_string(),
                parent_type: parent_type.to_string(),
                location: location.to_string(),
            });
    }

    /// Stores a raw grant target exactly as given, blanks included.
    pub fn add_grant(&self, principal_id: &str, target: &str) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .grants
            .push(SiteGrant::new(principal_id, target));
    }

    pub fn add_role(&self, principal_id: &str, role_name: &str) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .roles
            .entry(principal_id.to_string())
            .or_default()
            .push(role_name.to_string());
    }

    pub fn fail_role_lookups(&self) {
        self.state.lock().expect("mutex poisoned").fail_role_lookup = true;
    }

    pub fn grant_reads(&self) -> usize {
        self.state.lock().expect("mutex poisoned").grant_reads
    }

    pub fn list_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").list_calls
    }

    pub fn stored_targets(&self, principal_id: &str) -> Vec<String> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .grants
            .iter()
            .filter(|grant| grant.principal_id == principal_id)
            .map(|grant| grant.target.clone())
            .collect()
    }

    pub fn row_names(&self, table: &str) -> BTreeSet<String> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .tables
            .get(table)
            .map(|rows| rows.iter().map(|row| row.name.clone()).collect())
            .unwrap_or_default()
    }
}

struct RowView<'a> {
    row: &'a StoredRow,
    links: &'a [StoredLink],
}

impl ScopedRow for RowView<'_> {
    fn column_value(&self, column: &str) -> Option<&str> {
        if column == "name" {
            return Some(&self.row.name);
        }
        self.row.columns.get(column).map(String::as_str)
    }

    fn linked_locations(&self, _link: &AggregateLink, parent_type: &str) -> Vec<String> {
        self.links
            .iter()
            .filter(|link| link.parent == self.row.name && link.parent_type == parent_type)
            .map(|link| link.location.clone())
            .collect()
    }
}

fn project(registration: &ResourceRegistration, row: &StoredRow) -> ScopedRecord {
    let column = |name: &str| row.columns.get(name).cloned();
    let (site, location) = match &registration.shape {
        ResourceShape::Direct { site_column } | ResourceShape::BridgeTarget { site_column } => {
            (column(site_column), None)
        }
        ResourceShape::SelfReferential { .. } => (Some(row.name.clone()), None),
        ResourceShape::Bridge { location_column } => (None, column(location_column)),
        ResourceShape::Aggregate { .. } => (None, None),
    };

    ScopedRecord {
        resource_type: registration.resource_type.clone(),
        name: row.name.clone(),
        site,
        location,
    }
}

#[async_trait]
impl SiteGrantRepository for FakeSiteScopeStore {
    async fn find_site_targets(
        &self,
        principal_id: &PrincipalId,
    ) -> Result<Vec<String>, SiteScopeDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.grant_reads += 1;
        Ok(state
            .grants
            .iter()
            .filter(|grant| {
                grant.principal_id == principal_id.value() && grant.allow_kind == SITE_ALLOW_KIND
            })
            .map(|grant| grant.target.clone())
            .collect())
    }

    async fn find_grants(
        &self,
        principal_id: &PrincipalId,
    ) -> Result<Vec<SiteGrant>, SiteScopeDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state
            .grants
            .iter()
            .filter(|grant| grant.principal_id == principal_id.value())
            .cloned()
            .collect())
    }

    async fn insert_grant(&self, grant: SiteGrant) -> Result<bool, SiteScopeDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        let exists = state.grants.iter().any(|stored| {
            stored.principal_id == grant.principal_id
                && stored.allow_kind == grant.allow_kind
                && stored.target == grant.target
        });
        if exists {
            return Ok(false);
        }
        state.grants.push(grant);
        Ok(true)
    }

    async fn delete_grant(
        &self,
        principal_id: &PrincipalId,
        site_id: &SiteId,
    ) -> Result<bool, SiteScopeDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        let before = state.grants.len();
        state.grants.retain(|grant| {
            !(grant.principal_id == principal_id.value()
                && grant.allow_kind == SITE_ALLOW_KIND
                && grant.target.trim() == site_id.value())
        });
        Ok(state.grants.len() < before)
    }
}

#[async_trait]
impl RoleMembershipRepository for FakeSiteScopeStore {
    async fn find_roles(
        &self,
        principal_id: &PrincipalId,
    ) -> Result<Vec<String>, SiteScopeDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        if state.fail_role_lookup {
            return Err(SiteScopeDomainError::InfrastructureError(
                "role directory unavailable".to_string(),
            ));
        }
        Ok(state
            .roles
            .get(principal_id.value())
            .cloned()
            .unwrap_or_default())
    }

    async fn assign_role(
        &self,
        principal_id: &PrincipalId,
        role_name: &RoleName,
    ) -> Result<(), SiteScopeDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        let roles = state
            .roles
            .entry(principal_id.value().to_string())
            .or_default();
        if !roles.iter().any(|role| role == role_name.value()) {
            roles.push(role_name.value().to_string());
        }
        Ok(())
    }
}

#[async_trait]
impl SiteDirectoryRepository for FakeSiteScopeStore {
    async fn site_exists(&self, name: &str) -> Result<bool, SiteScopeDomainError> {
        Ok(self
            .state
            .lock()
            .expect("mutex poisoned")
            .site_aliases
            .contains_key(name))
    }

    async fn find_site_by_alias(
        &self,
        alias: &str,
    ) -> Result<Option<String>, SiteScopeDomainError> {
        Ok(self
            .state
            .lock()
            .expect("mutex poisoned")
            .site_aliases
            .iter()
            .find(|(_, site_alias)| site_alias.as_deref() == Some(alias))
            .map(|(name, _)| name.clone()))
    }

    async fn find_any_site(&self) -> Result<Option<String>, SiteScopeDomainError> {
        Ok(self
            .state
            .lock()
            .expect("mutex poisoned")
            .site_aliases
            .keys()
            .next()
            .cloned())
    }
}

#[async_trait]
impl LocationDirectoryRepository for FakeSiteScopeStore {
    async fn find_location_site(
        &self,
        location: &str,
    ) -> Result<Option<String>, SiteScopeDomainError> {
        Ok(self
            .state
            .lock()
            .expect("mutex poisoned")
            .location_sites
            .get(location)
            .cloned()
            .flatten())
    }

    async fn find_locations_by_sites(
        &self,
        sites: &[String],
    ) -> Result<Vec<String>, SiteScopeDomainError> {
        Ok(self
            .state
            .lock()
            .expect("mutex poisoned")
            .location_sites
            .iter()
            .filter(|(_, site)| matches!(site, Some(site) if sites.contains(site)))
            .map(|(name, _)| name.clone())
            .collect())
    }
}

#[async_trait]
impl LinkedLocationRepository for FakeSiteScopeStore {
    async fn find_linked_locations(
        &self,
        _link: &AggregateLink,
        parent_type: &str,
        parent: &str,
    ) -> Result<Vec<String>, SiteScopeDomainError> {
        Ok(self
            .state
            .lock()
            .expect("mutex poisoned")
            .links
            .iter()
            .filter(|link| link.parent == parent && link.parent_type == parent_type)
            .map(|link| link.location.clone())
            .collect())
    }
}

#[async_trait]
impl ScopedRecordRepository for FakeSiteScopeStore {
    async fn find_record(
        &self,
        registration: &ResourceRegistration,
        name: &str,
    ) -> Result<Option<ScopedRecord>, SiteScopeDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state
            .tables
            .get(&registration.table_name)
            .and_then(|rows| rows.iter().find(|row| row.name == name))
            .map(|row| project(registration, row)))
    }

    async fn list_records(
        &self,
        criteria: ListScopedRecordsCriteria,
    ) -> Result<Vec<ScopedRecord>, SiteScopeDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.list_calls += 1;

        let Some(rows) = state.tables.get(&criteria.registration.table_name) else {
            return Ok(Vec::new());
        };

        let mut visible = rows
            .iter()
            .filter(|row| {
                criteria.condition.matches(&RowView {
                    row,
                    links: &state.links,
                })
            })
            .map(|row| project(&criteria.registration, row))
            .collect::<Vec<_>>();
        visible.sort_by(|left, right| left.name.cmp(&right.name));

        Ok(visible
            .into_iter()
            .skip(criteria.offset as usize)
            .take(criteria.limit as usize)
            .collect())
    }
}
