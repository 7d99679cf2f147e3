//! File container contract metadata.
//!
//! Generated from the `Container` area descriptors; regenerated with the
//! service contract, do not edit by hand.

use gantry_core::{EnumMeta, FieldRule, RegistryBuilder, TypeMeta};

pub fn register(b: &mut RegistryBuilder) {
    // Bit flags; values combine.
    b.declare_enum(EnumMeta::new("ContainerOptions", &[("none", 0)]));
    b.declare_enum(EnumMeta::new(
        "ContainerItemStatus",
        &[("created", 1), ("pendingupload", 2)],
    ));
    b.declare_enum(EnumMeta::new(
        "ContainerItemType",
        &[("any", 0), ("folder", 1), ("file", 2)],
    ));

    b.declare_type(TypeMeta::new(
        "FileContainer",
        [
            ("dateCreated", FieldRule::Date),
            ("options", FieldRule::Enum("ContainerOptions")),
        ],
    ));
    b.declare_type(TypeMeta::new(
        "FileContainerItem",
        [
            ("dateCreated", FieldRule::Date),
            ("dateLastModified", FieldRule::Date),
            ("itemType", FieldRule::Enum("ContainerItemType")),
            ("status", FieldRule::Enum("ContainerItemStatus")),
        ],
    ));
}
