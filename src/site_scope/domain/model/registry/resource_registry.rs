use std::collections::{BTreeMap, BTreeSet};

use crate::site_scope::domain::model::{
    entities::resource_registration::ResourceRegistration,
    enums::site_scope_domain_error::SiteScopeDomainError,
    value_objects::sql_identifier::SqlIdentifier,
};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RegistryCoverageReport {
    pub resource_types: Vec<String>,
    pub defects: Vec<String>,
}

impl RegistryCoverageReport {
    pub fn is_complete(&self) -> bool {
        self.defects.is_empty()
    }
}

/// Query-condition and has-permission registrations per resource type.
///
/// Both halves are kept apart so a type registered on only one side shows up
/// as a coverage defect instead of silently falling back to no filtering.
#[derive(Clone, Debug, Default)]
pub struct ResourceRegistry {
    query_conditions: BTreeMap<String, ResourceRegistration>,
    has_permissions: BTreeMap<String, ResourceRegistration>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, registration: ResourceRegistration) -> &mut Self {
        self.register_query_condition(registration.clone());
        self.register_has_permission(registration);
        self
    }

    pub fn register_query_condition(&mut self, registration: ResourceRegistration) -> &mut Self {
        self.query_conditions
            .insert(registration.resource_type.clone(), registration);
        self
    }

    pub fn register_has_permission(&mut self, registration: ResourceRegistration) -> &mut Self {
        self.has_permissions
            .insert(registration.resource_type.clone(), registration);
        self
    }

    pub fn resource_types(&self) -> Vec<String> {
        self.query_conditions
            .keys()
            .chain(self.has_permissions.keys())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn query_condition_registration(
        &self,
        resource_type: &str,
    ) -> Result<&ResourceRegistration, SiteScopeDomainError> {
        Self::lookup(
            &self.query_conditions,
            &self.has_permissions,
            resource_type,
            "query condition",
        )
    }

    pub fn has_permission_registration(
        &self,
        resource_type: &str,
    ) -> Result<&ResourceRegistration, SiteScopeDomainError> {
        Self::lookup(
            &self.has_permissions,
            &self.query_conditions,
            resource_type,
            "has-permission",
        )
    }

    fn lookup<'a>(
        primary: &'a BTreeMap<String, ResourceRegistration>,
        counterpart: &BTreeMap<String, ResourceRegistration>,
        resource_type: &str,
        half: &str,
    ) -> Result<&'a ResourceRegistration, SiteScopeDomainError> {
        match primary.get(resource_type) {
            Some(registration) => Ok(registration),
            None if counterpart.contains_key(resource_type) => {
                Err(SiteScopeDomainError::Misconfigured(format!(
                    "{resource_type} has no {half} registration"
                )))
            }
            None => Err(SiteScopeDomainError::UnknownResourceType(
                resource_type.to_string(),
            )),
        }
    }

    pub fn coverage_report(&self) -> RegistryCoverageReport {
        let resource_types = self.resource_types();
        let mut defects = Vec::new();

        for resource_type in &resource_types {
            let query_condition = self.query_conditions.get(resource_type);
            let has_permission = self.has_permissions.get(resource_type);

            match (query_condition, has_permission) {
                (Some(_), None) => defects.push(format!(
                    "{resource_type} is registered for query conditions but not for has-permission; direct reads are unguarded"
                )),
                (None, Some(_)) => defects.push(format!(
                    "{resource_type} is registered for has-permission but not for query conditions; listings are unfiltered"
                )),
                (Some(left), Some(right)) => {
                    if left.shape != right.shape {
                        defects.push(format!(
                            "{resource_type} registers different shapes for query conditions ({}) and has-permission ({})",
                            left.shape.as_str(),
                            right.shape.as_str()
                        ));
                    }
                    if left.table_name != right.table_name || left.key_column != right.key_column {
                        defects.push(format!(
                            "{resource_type} registers different tables for query conditions ({}.{}) and has-permission ({}.{})",
                            left.table_name, left.key_column, right.table_name, right.key_column
                        ));
                    }
                }
                (None, None) => {}
            }

            let mut identifier_defects = BTreeSet::new();
            for registration in [query_condition, has_permission].into_iter().flatten() {
                let identifiers = [
                    registration.table_name.as_str(),
                    registration.key_column.as_str(),
                ]
                .into_iter()
                .chain(registration.shape.identifiers());

                for identifier in identifiers {
                    if let Err(error) = SqlIdentifier::new(identifier) {
                        identifier_defects.insert(format!("{resource_type}: {error}"));
                    }
                }
            }
            defects.extend(identifier_defects);
        }

        RegistryCoverageReport {
            resource_types,
            defects,
        }
    }

    pub fn verify_coverage(&self) -> Result<(), SiteScopeDomainError> {
        let report = self.coverage_report();
        if report.is_complete() {
            return Ok(());
        }
        Err(SiteScopeDomainError::Misconfigured(report.defects.join("; ")))
    }
}
