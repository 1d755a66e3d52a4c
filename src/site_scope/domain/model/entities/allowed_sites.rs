use std::collections::BTreeSet;

/// Outcome of site resolution for one principal at one point in time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AllowedSites {
    Unrestricted,
    Scoped(BTreeSet<String>),
}

impl AllowedSites {
    /// Trims grant targets and drops blanks. An empty result stays scoped.
    pub fn scoped<I>(targets: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self::Scoped(
            targets
                .into_iter()
                .map(|target| target.trim().to_string())
                .filter(|target| !target.is_empty())
                .collect(),
        )
    }

    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Self::Unrestricted)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Unrestricted => false,
            Self::Scoped(sites) => sites.is_empty(),
        }
    }

    pub fn contains(&self, site: Option<&str>) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Scoped(sites) => match site {
                Some(site) if !site.trim().is_empty() => sites.contains(site),
                _ => false,
            },
        }
    }

    pub fn sites(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::Unrestricted => None,
            Self::Scoped(sites) => Some(sites),
        }
    }
}
