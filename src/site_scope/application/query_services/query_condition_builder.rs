use std::{collections::BTreeSet, sync::Arc};

use crate::site_scope::{
    application::resolvers::{bridge_resolver::BridgeResolver, site_set_resolver::SiteSetResolver},
    domain::model::{
        entities::{allowed_sites::AllowedSites, resource_registration::ResourceRegistration},
        enums::{resource_shape::ResourceShape, site_scope_domain_error::SiteScopeDomainError},
        predicates::query_condition::QueryCondition,
        value_objects::principal_id::PrincipalId,
    },
};

/// Produces the listing filter for one resource type. Reads grant state but
/// never runs the listing query itself.
pub struct QueryConditionBuilder {
    site_set_resolver: Arc<SiteSetResolver>,
    bridge_resolver: Arc<BridgeResolver>,
}

impl QueryConditionBuilder {
    pub fn new(site_set_resolver: Arc<SiteSetResolver>, bridge_resolver: Arc<BridgeResolver>) -> Self {
        Self {
            site_set_resolver,
            bridge_resolver,
        }
    }

    pub async fn build(
        &self,
        registration: &ResourceRegistration,
        principal_id: &PrincipalId,
    ) -> Result<QueryCondition, SiteScopeDomainError> {
        let allowed_sites = self
            .site_set_resolver
            .resolve_allowed_sites(principal_id)
            .await?;

        let sites = match &allowed_sites {
            AllowedSites::Unrestricted => return Ok(QueryCondition::Unrestricted),
            AllowedSites::Scoped(sites) => sites,
        };

        let condition = match &registration.shape {
            ResourceShape::Direct { site_column } | ResourceShape::BridgeTarget { site_column } => {
                in_set(&registration.table_name, site_column, sites)
            }
            ResourceShape::SelfReferential { id_column } => {
                in_set(&registration.table_name, id_column, sites)
            }
            ResourceShape::Bridge { location_column } => {
                let locations = self
                    .bridge_resolver
                    .resolve_allowed_locations(&allowed_sites)
                    .await?;
                in_set(&registration.table_name, location_column, &locations)
            }
            ResourceShape::Aggregate { link } => {
                let locations = self
                    .bridge_resolver
                    .resolve_allowed_locations(&allowed_sites)
                    .await?;
                if locations.is_empty() {
                    QueryCondition::DenyAll
                } else {
                    QueryCondition::LinkedExists {
                        table: registration.table_name.clone(),
                        key_column: registration.key_column.clone(),
                        parent_type: registration.resource_type.clone(),
                        link: link.clone(),
                        values: locations.into_iter().collect(),
                    }
                }
            }
        };

        Ok(condition)
    }
}

fn in_set(table: &str, column: &str, values: &BTreeSet<String>) -> QueryCondition {
    if values.is_empty() {
        return QueryCondition::DenyAll;
    }

    QueryCondition::InSet {
        table: table.to_string(),
        column: column.to_string(),
        values: values.iter().cloned().collect(),
    }
}
