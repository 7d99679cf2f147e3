//! Task agent and data-source binding contract metadata.
//!
//! Generated from the `TaskAgent` area descriptors; regenerated with the
//! service contract, do not edit by hand. Data-source binding types carry
//! no converted fields and therefore have no tables here.

use gantry_core::{EnumMeta, FieldRule, RegistryBuilder, TypeMeta};

pub fn register(b: &mut RegistryBuilder) {
    b.declare_enum(EnumMeta::new(
        "TaskAgentPoolType",
        &[("automation", 1), ("deployment", 2)],
    ));
    b.declare_enum(EnumMeta::new(
        "TaskAgentStatus",
        &[("offline", 1), ("online", 2)],
    ));
    b.declare_enum(EnumMeta::new(
        "TaskResult",
        &[
            ("succeeded", 0),
            ("succeededwithissues", 1),
            ("failed", 2),
            ("canceled", 3),
            ("skipped", 4),
            ("abandoned", 5),
        ],
    ));

    b.declare_type(TypeMeta::new(
        "TaskAgentPool",
        [
            ("createdOn", FieldRule::Date),
            ("poolType", FieldRule::Enum("TaskAgentPoolType")),
        ],
    ));
    b.declare_type(TypeMeta::new(
        "TaskAgent",
        [
            ("createdOn", FieldRule::Date),
            ("statusChangedOn", FieldRule::Date),
            ("status", FieldRule::Enum("TaskAgentStatus")),
        ],
    ));
    b.declare_type(TypeMeta::new(
        "ServiceEndpointExecutionData",
        [
            ("startTime", FieldRule::Date),
            ("finishTime", FieldRule::Date),
            ("result", FieldRule::Enum("TaskResult")),
        ],
    ));
}
