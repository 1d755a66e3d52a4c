use crate::site_scope::domain::model::{
    enums::resource_shape::AggregateLink,
    predicates::sql_text::{escape_literal, literal_list, quote_identifier},
};

/// Row-level filter attached by the listing layer to its bulk query.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum QueryCondition {
    Unrestricted,
    DenyAll,
    InSet {
        table: String,
        column: String,
        values: Vec<String>,
    },
    /// Correlated existence check over an aggregate's link rows.
    LinkedExists {
        table: String,
        key_column: String,
        parent_type: String,
        link: AggregateLink,
        values: Vec<String>,
    },
}

/// Read access to one candidate row, for evaluating a condition in memory.
pub trait ScopedRow {
    fn column_value(&self, column: &str) -> Option<&str>;

    fn linked_locations(&self, link: &AggregateLink, parent_type: &str) -> Vec<String>;
}

impl QueryCondition {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unrestricted => "unrestricted",
            Self::DenyAll => "deny_all",
            Self::InSet { .. } => "in_set",
            Self::LinkedExists { .. } => "linked_exists",
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Self::Unrestricted)
    }

    pub fn is_deny_all(&self) -> bool {
        matches!(self, Self::DenyAll)
    }

    pub fn values(&self) -> &[String] {
        match self {
            Self::InSet { values, .. } | Self::LinkedExists { values, .. } => values,
            Self::Unrestricted | Self::DenyAll => &[],
        }
    }

    /// Textual fallback for query layers that only accept raw SQL. `None`
    /// means no filtering is required.
    pub fn to_sql_text(&self) -> Option<String> {
        match self {
            Self::Unrestricted => None,
            Self::DenyAll => Some("1=0".to_string()),
            Self::InSet {
                table,
                column,
                values,
            } => Some(format!(
                "{}.{} IN ({})",
                quote_identifier(table),
                quote_identifier(column),
                literal_list(values)
            )),
            Self::LinkedExists {
                table,
                key_column,
                parent_type,
                link,
                values,
            } => Some(format!(
                "EXISTS (SELECT 1 FROM {} ll WHERE ll.{} = {}.{} AND ll.{} = {} AND ll.{} IN ({}))",
                quote_identifier(&link.table),
                quote_identifier(&link.parent_column),
                quote_identifier(table),
                quote_identifier(key_column),
                quote_identifier(&link.parent_type_column),
                escape_literal(parent_type),
                quote_identifier(&link.location_column),
                literal_list(values)
            )),
        }
    }

    pub fn matches(&self, row: &dyn ScopedRow) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::DenyAll => false,
            Self::InSet { column, values, .. } => row
                .column_value(column)
                .is_some_and(|value| values.iter().any(|allowed| allowed == value)),
            Self::LinkedExists {
                parent_type,
                link,
                values,
                ..
            } => row
                .linked_locations(link, parent_type)
                .iter()
                .any(|location| values.contains(location)),
        }
    }
}
