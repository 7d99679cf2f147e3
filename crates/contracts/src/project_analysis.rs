//! Project analysis contract metadata.
//!
//! Generated from the `ProjectAnalysis` area descriptors; regenerated with
//! the service contract, do not edit by hand.

use gantry_core::{EnumMeta, FieldRule, RegistryBuilder, TypeMeta};

pub fn register(b: &mut RegistryBuilder) {
    b.declare_enum(EnumMeta::new(
        "ResultPhase",
        &[("preliminary", 0), ("full", 1)],
    ));
    b.declare_enum(EnumMeta::new(
        "AggregationType",
        &[("hourly", 0), ("daily", 1)],
    ));

    b.declare_type(TypeMeta::new(
        "CodeChangeTrendItem",
        [("time", FieldRule::Date)],
    ));
    b.declare_type(TypeMeta::new(
        "RepositoryLanguageAnalytics",
        [
            ("resultPhase", FieldRule::Enum("ResultPhase")),
            ("updatedTime", FieldRule::Date),
        ],
    ));
    b.declare_type(TypeMeta::new(
        "ProjectLanguageAnalytics",
        [
            ("resultPhase", FieldRule::Enum("ResultPhase")),
            (
                "repositoryLanguageAnalytics",
                FieldRule::array(FieldRule::Nested("RepositoryLanguageAnalytics")),
            ),
        ],
    ));
    b.declare_type(TypeMeta::new(
        "ProjectActivityMetrics",
        [(
            "codeChangesTrend",
            FieldRule::array(FieldRule::Nested("CodeChangeTrendItem")),
        )],
    ));
}
