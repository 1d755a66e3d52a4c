use crate::site_scope::domain::model::enums::resource_shape::ResourceShape;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResourceRegistration {
    pub resource_type: String,
    pub table_name: String,
    pub key_column: String,
    pub shape: ResourceShape,
}

impl ResourceRegistration {
    pub fn new(resource_type: &str, table_name: &str, shape: ResourceShape) -> Self {
        Self {
            resource_type: resource_type.to_string(),
            table_name: table_name.to_string(),
            key_column: "name".to_string(),
            shape,
        }
    }
}
