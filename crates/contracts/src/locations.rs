//! Location service contract metadata.
//!
//! Generated from the `Locations` area descriptors; regenerated with the
//! service contract, do not edit by hand.

use gantry_core::{EnumMeta, FieldRule, RegistryBuilder, TypeMeta};

pub fn register(b: &mut RegistryBuilder) {
    b.declare_enum(EnumMeta::new(
        "InheritLevel",
        &[
            ("none", 0),
            ("deployment", 1),
            ("account", 2),
            ("collection", 4),
            ("all", 7),
        ],
    ));
    b.declare_enum(EnumMeta::new(
        "RelativeToSetting",
        &[("context", 0), ("webapplication", 2), ("fullyqualified", 3)],
    ));
    b.declare_enum(EnumMeta::new(
        "ServiceStatus",
        &[("assigned", 0), ("active", 1), ("moving", 2)],
    ));

    b.declare_type(TypeMeta::new(
        "ServiceDefinition",
        [
            ("inheritLevel", FieldRule::Enum("InheritLevel")),
            ("relativeToSetting", FieldRule::Enum("RelativeToSetting")),
            ("status", FieldRule::Enum("ServiceStatus")),
        ],
    ));
    b.declare_type(TypeMeta::new(
        "LocationServiceData",
        [(
            "serviceDefinitions",
            FieldRule::array(FieldRule::Nested("ServiceDefinition")),
        )],
    ));
    b.declare_type(TypeMeta::new(
        "ConnectionData",
        [
            ("lastUserAccess", FieldRule::Date),
            (
                "locationServiceData",
                FieldRule::Nested("LocationServiceData"),
            ),
        ],
    ));
}
