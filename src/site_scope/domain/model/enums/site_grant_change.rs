#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SiteGrantChange {
    Granted,
    Revoked,
}

impl SiteGrantChange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Granted => "granted",
            Self::Revoked => "revoked",
        }
    }
}
