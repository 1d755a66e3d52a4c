/// A record handed to the instance check, either loaded (fields known) or
/// only identified by name.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResourceInstance {
    name: Option<String>,
    site: Option<String>,
    location: Option<String>,
}

impl ResourceInstance {
    pub fn new(name: Option<String>, site: Option<String>, location: Option<String>) -> Self {
        Self {
            name: non_blank(name),
            site: non_blank(site),
            location: non_blank(location),
        }
    }

    pub fn identified(name: &str) -> Self {
        Self::new(Some(name.to_string()), None, None)
    }

    pub fn with_site(name: &str, site: &str) -> Self {
        Self::new(Some(name.to_string()), Some(site.to_string()), None)
    }

    pub fn with_location(name: &str, location: &str) -> Self {
        Self::new(Some(name.to_string()), None, Some(location.to_string()))
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn site(&self) -> Option<&str> {
        self.site.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

// Values are kept verbatim so they compare the same way the listing filter does.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
