use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder, Row, postgres::PgRow};

use crate::site_scope::{
    domain::model::{
        entities::{resource_registration::ResourceRegistration, scoped_record::ScopedRecord},
        enums::{resource_shape::ResourceShape, site_scope_domain_error::SiteScopeDomainError},
    },
    infrastructure::persistence::{
        repositories::scoped_record_repository::{
            ListScopedRecordsCriteria, ScopedRecordRepository,
        },
        sql::query_condition_sql::{push_query_condition, quoted},
    },
};

pub struct SqlxScopedRecordRepositoryImpl {
    pool: PgPool,
}

impl SqlxScopedRecordRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select_clause(registration: &ResourceRegistration) -> Result<String, SiteScopeDomainError> {
        let table = quoted(&registration.table_name)?;
        let key = format!("{table}.{}", quoted(&registration.key_column)?);

        let (site, location) = match &registration.shape {
            ResourceShape::Direct { site_column } | ResourceShape::BridgeTarget { site_column } => (
                format!("{table}.{}", quoted(site_column)?),
                "NULL::text".to_string(),
            ),
            ResourceShape::SelfReferential { id_column } => (
                format!("{table}.{}", quoted(id_column)?),
                "NULL::text".to_string(),
            ),
            ResourceShape::Bridge { location_column } => (
                "NULL::text".to_string(),
                format!("{table}.{}", quoted(location_column)?),
            ),
            ResourceShape::Aggregate { .. } => ("NULL::text".to_string(), "NULL::text".to_string()),
        };

        Ok(format!(
            "SELECT {key} AS name, {site} AS site, {location} AS location FROM {table}"
        ))
    }

    fn map_row(
        registration: &ResourceRegistration,
        row: PgRow,
    ) -> Result<ScopedRecord, SiteScopeDomainError> {
        Ok(ScopedRecord {
            resource_type: registration.resource_type.clone(),
            name: row
                .try_get::<String, _>("name")
                .map_err(|e| SiteScopeDomainError::InfrastructureError(e.to_string()))?,
            site: row
                .try_get::<Option<String>, _>("site")
                .map_err(|e| SiteScopeDomainError::InfrastructureError(e.to_string()))?,
            location: row
                .try_get::<Option<String>, _>("location")
                .map_err(|e| SiteScopeDomainError::InfrastructureError(e.to_string()))?,
        })
    }
}

#[async_trait]
impl ScopedRecordRepository for SqlxScopedRecordRepositoryImpl {
    async fn find_record(
        &self,
        registration: &ResourceRegistration,
        name: &str,
    ) -> Result<Option<ScopedRecord>, SiteScopeDomainError> {
        let mut builder = QueryBuilder::<Postgres>::new(Self::select_clause(registration)?);
        builder.push(format!(
            " WHERE {}.{} = ",
            quoted(&registration.table_name)?,
            quoted(&registration.key_column)?
        ));
        builder.push_bind(name);

        let row = builder
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| SiteScopeDomainError::InfrastructureError(e.to_string()))?;

        row.map(|row| Self::map_row(registration, row)).transpose()
    }

    async fn list_records(
        &self,
        criteria: ListScopedRecordsCriteria,
    ) -> Result<Vec<ScopedRecord>, SiteScopeDomainError> {
        let registration = &criteria.registration;
        let mut builder = QueryBuilder::<Postgres>::new(Self::select_clause(registration)?);

        builder.push(" WHERE ");
        push_query_condition(&mut builder, &criteria.condition)?;
        builder.push(format!(
            " ORDER BY {}.{} ASC",
            quoted(&registration.table_name)?,
            quoted(&registration.key_column)?
        ));
        builder.push(" LIMIT ");
        builder.push_bind(criteria.limit);
        builder.push(" OFFSET ");
        builder.push_bind(criteria.offset);

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| SiteScopeDomainError::InfrastructureError(e.to_string()))?;

        rows.into_iter()
            .map(|row| Self::map_row(registration, row))
            .collect()
    }
}
