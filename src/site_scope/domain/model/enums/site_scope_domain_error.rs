use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteScopeDomainError {
    #[error("principal id is invalid")]
    InvalidPrincipalId,

    #[error("site id is invalid")]
    InvalidSiteId,

    #[error("role name is invalid")]
    InvalidRoleName,

    #[error("resource type is invalid")]
    InvalidResourceType,

    #[error("operation is invalid")]
    InvalidOperation,

    #[error("sql identifier is invalid: {0}")]
    InvalidIdentifier(String),

    #[error("invalid pagination parameters")]
    InvalidQueryParameters,

    #[error("Every record must belong to a Site")]
    MissingSite,

    #[error("Not permitted for this Site")]
    AccessDenied,

    #[error("{0}")]
    NotFound(String),

    #[error("resource type is not registered: {0}")]
    UnknownResourceType(String),

    #[error("site isolation is misconfigured: {0}")]
    Misconfigured(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
