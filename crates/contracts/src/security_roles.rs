//! Security role contract metadata.
//!
//! Generated from the `SecurityRoles` area descriptors; regenerated with
//! the service contract, do not edit by hand.

use gantry_core::{EnumMeta, FieldRule, RegistryBuilder, TypeMeta};

pub fn register(b: &mut RegistryBuilder) {
    b.declare_enum(EnumMeta::new(
        "RoleAccess",
        &[("assigned", 1), ("inherited", 2)],
    ));
    b.declare_enum(EnumMeta::new(
        "RoleScope",
        &[("global", 0), ("collection", 1), ("project", 2)],
    ));

    b.declare_type(TypeMeta::new(
        "SecurityRole",
        [("scope", FieldRule::Enum("RoleScope"))],
    ));
    b.declare_type(TypeMeta::new(
        "RoleAssignment",
        [
            ("access", FieldRule::Enum("RoleAccess")),
            ("role", FieldRule::Nested("SecurityRole")),
        ],
    ));
}
