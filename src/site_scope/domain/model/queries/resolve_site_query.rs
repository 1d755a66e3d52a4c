#[derive(Clone, Debug)]
pub struct ResolveSiteQuery {
    identifier: Option<String>,
}

impl ResolveSiteQuery {
    pub fn new(identifier: Option<String>) -> Self {
        Self {
            identifier: identifier
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
        }
    }

    /// `None` asks for any existing site.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }
}
