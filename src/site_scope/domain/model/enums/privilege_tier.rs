#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PrivilegeTier {
    Unrestricted,
    GlobalRole,
    Scoped,
}

impl PrivilegeTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unrestricted => "unrestricted",
            Self::GlobalRole => "global_role",
            Self::Scoped => "scoped",
        }
    }

    /// Both bypass tiers behave exactly like "every site granted".
    pub fn bypasses_site_filtering(&self) -> bool {
        matches!(self, Self::Unrestricted | Self::GlobalRole)
    }
}
