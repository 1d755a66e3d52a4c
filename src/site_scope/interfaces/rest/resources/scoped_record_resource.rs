use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListScopedRecordsParamsResource {
    #[validate(length(min = 1))]
    pub principal_id: String,
    #[validate(range(min = 1, max = 500))]
    pub limit: Option<i64>,
    #[validate(range(min = 0))]
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetScopedRecordParamsResource {
    #[validate(length(min = 1))]
    pub principal_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ScopedRecordResource {
    pub resource_type: String,
    pub name: String,
    pub site: Option<String>,
    pub location: Option<String>,
}
