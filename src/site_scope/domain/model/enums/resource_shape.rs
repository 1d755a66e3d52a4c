/// Child collection linking an aggregate record to bridge (location) records.
///
/// Rows look like `(parent, parenttype, location)`; `parenttype` carries the
/// owning resource type name so several aggregates can share one link table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AggregateLink {
    pub table: String,
    pub parent_column: String,
    pub parent_type_column: String,
    pub location_column: String,
}

/// How a resource type carries its tenancy.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResourceShape {
    /// The record has its own site column.
    Direct { site_column: String },
    /// The record is the bridge other types reference. Listings filter its
    /// site column; instance checks read the stored site by key and ignore
    /// any site the caller supplies.
    BridgeTarget { site_column: String },
    /// The record is the site; its key column is the site identifier.
    SelfReferential { id_column: String },
    /// The record references a location, and the location carries the site.
    Bridge { location_column: String },
    /// The record links to many locations through a child table; any allowed
    /// location grants access.
    Aggregate { link: AggregateLink },
}

impl ResourceShape {
    pub fn direct(site_column: &str) -> Self {
        Self::Direct {
            site_column: site_column.to_string(),
        }
    }

    pub fn bridge_target(site_column: &str) -> Self {
        Self::BridgeTarget {
            site_column: site_column.to_string(),
        }
    }

    pub fn self_referential(id_column: &str) -> Self {
        Self::SelfReferential {
            id_column: id_column.to_string(),
        }
    }

    pub fn bridge(location_column: &str) -> Self {
        Self::Bridge {
            location_column: location_column.to_string(),
        }
    }

    pub fn aggregate(
        table: &str,
        parent_column: &str,
        parent_type_column: &str,
        location_column: &str,
    ) -> Self {
        Self::Aggregate {
            link: AggregateLink {
                table: table.to_string(),
                parent_column: parent_column.to_string(),
                parent_type_column: parent_type_column.to_string(),
                location_column: location_column.to_string(),
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct { .. } => "direct",
            Self::BridgeTarget { .. } => "bridge_target",
            Self::SelfReferential { .. } => "self_referential",
            Self::Bridge { .. } => "bridge",
            Self::Aggregate { .. } => "aggregate",
        }
    }

    pub fn identifiers(&self) -> Vec<&str> {
        match self {
            Self::Direct { site_column } | Self::BridgeTarget { site_column } => {
                vec![site_column.as_str()]
            }
            Self::SelfReferential { id_column } => vec![id_column.as_str()],
            Self::Bridge { location_column } => vec![location_column.as_str()],
            Self::Aggregate { link } => vec![
                link.table.as_str(),
                link.parent_column.as_str(),
                link.parent_type_column.as_str(),
                link.location_column.as_str(),
            ],
        }
    }
}
