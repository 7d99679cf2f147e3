//! Feature management contract metadata.
//!
//! Generated from the `FeatureManagement` area descriptors; regenerated
//! with the service contract, do not edit by hand.

use gantry_core::{EnumMeta, FieldRule, RegistryBuilder, TypeMeta};

pub fn register(b: &mut RegistryBuilder) {
    b.declare_enum(EnumMeta::new(
        "ContributedFeatureEnabledValue",
        &[("undefined", 0), ("disabled", 1), ("enabled", 2)],
    ));
    // Bit flags; values combine.
    b.declare_enum(EnumMeta::new(
        "FeatureSettingLevel",
        &[("host", 0), ("collection", 1), ("project", 2), ("user", 4)],
    ));

    b.declare_type(TypeMeta::new(
        "ContributedFeatureSettingScope",
        [("level", FieldRule::Enum("FeatureSettingLevel"))],
    ));
    b.declare_type(TypeMeta::new(
        "ContributedFeature",
        [(
            "scopes",
            FieldRule::array(FieldRule::Nested("ContributedFeatureSettingScope")),
        )],
    ));
    b.declare_type(TypeMeta::new(
        "ContributedFeatureState",
        [("state", FieldRule::Enum("ContributedFeatureEnabledValue"))],
    ));
    b.declare_type(TypeMeta::new(
        "ContributedFeatureStateQuery",
        [(
            "featureStates",
            FieldRule::dictionary(FieldRule::Nested("ContributedFeatureState")),
        )],
    ));
}
