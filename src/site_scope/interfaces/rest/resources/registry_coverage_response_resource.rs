use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RegistryCoverageResponseResource {
    pub complete: bool,
    pub resource_types: Vec<String>,
    pub defects: Vec<String>,
}
