//! gantry-contracts: conversion metadata for the Gantry REST contract areas.
//!
//! One module per REST area, each emitted by the contract generator from
//! the service's contract descriptors: the enum name tables and the
//! per-type field conversion tables the decoder needs. Business field
//! definitions beyond the converted fields are deliberately absent — a
//! type's table lists only what must be rewritten.
//!
//! [`standard_registry`] assembles every area into one frozen
//! [`MetaRegistry`] for the process to share.

use gantry_core::{MetaRegistry, RegistryError};

pub mod feature_management;
pub mod file_container;
pub mod locations;
pub mod project_analysis;
pub mod security_roles;
pub mod task_agent;

/// Build the registry covering all generated contract areas.
///
/// Construct once at startup and pass by reference; the result is
/// immutable and thread-safe. Fails only if the generated tables declare
/// a name twice, which is a generator bug.
pub fn standard_registry() -> Result<MetaRegistry, RegistryError> {
    let mut b = MetaRegistry::builder();
    feature_management::register(&mut b);
    file_container::register(&mut b);
    locations::register(&mut b);
    project_analysis::register(&mut b);
    security_roles::register(&mut b);
    task_agent::register(&mut b);
    b.build()
}
