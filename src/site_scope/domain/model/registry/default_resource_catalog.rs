use crate::site_scope::domain::model::{
    entities::resource_registration::ResourceRegistration,
    enums::resource_shape::ResourceShape, registry::resource_registry::ResourceRegistry,
};

pub const SITE_RESOURCE_TYPE: &str = "Site";
pub const LOCATION_RESOURCE_TYPE: &str = "Location";

const DIRECT_RESOURCES: &[(&str, &str)] = &[
    ("Lot", "lots"),
    ("QCTest", "qc_tests"),
    ("Certificate", "certificates"),
    ("Nonconformance", "nonconformances"),
    ("Device", "devices"),
    ("Observation", "observations"),
    ("Observation Threshold Policy", "observation_threshold_policies"),
    ("ScaleTicket", "scale_tickets"),
    ("Transfer", "transfers"),
    ("StorageBin", "storage_bins"),
    ("EvidencePack", "evidence_packs"),
    ("Complaint", "complaints"),
    ("Season Policy", "season_policies"),
    ("Site Tolerance Policy", "site_tolerance_policies"),
    ("AI Interaction Log", "ai_interaction_logs"),
    ("YAM Plot", "yam_plots"),
    ("YAM Soil Test", "yam_soil_tests"),
    ("YAM Plot Yield", "yam_plot_yields"),
    ("YAM Crop Variety", "yam_crop_varieties"),
    (
        "YAM Crop Variety Recommendation",
        "yam_crop_variety_recommendations",
    ),
];

/// Every isolated resource type of the platform, each with both halves
/// registered.
pub fn default_resource_catalog() -> ResourceRegistry {
    let mut registry = ResourceRegistry::new();

    registry.register(ResourceRegistration::new(
        SITE_RESOURCE_TYPE,
        "sites",
        ResourceShape::self_referential("name"),
    ));

    for (resource_type, table_name) in DIRECT_RESOURCES {
        registry.register(ResourceRegistration::new(
            resource_type,
            table_name,
            ResourceShape::direct("site"),
        ));
    }

    registry.register(ResourceRegistration::new(
        LOCATION_RESOURCE_TYPE,
        "locations",
        ResourceShape::bridge_target("site"),
    ));
    registry.register(ResourceRegistration::new(
        "Weather",
        "weather",
        ResourceShape::bridge("location"),
    ));
    registry.register(ResourceRegistration::new(
        "Crop Cycle",
        "crop_cycles",
        ResourceShape::aggregate("linked_locations", "parent", "parenttype", "location"),
    ));

    registry
}
