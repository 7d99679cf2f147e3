//! The shared metadata registry.
//!
//! All conversion tables live in one [`MetaRegistry`], built once at
//! startup with [`RegistryBuilder`] and then frozen. Call sites hold
//! `&MetaRegistry`; there is no global mutable state. Tables reference
//! each other by name and resolve at decode time, so declaration order is
//! irrelevant and cyclic type graphs are fine.

use std::collections::BTreeMap;

use crate::error::RegistryError;
use crate::meta::{EnumMeta, TypeMeta};

/// Incremental registry construction. Duplicate declarations are remembered
/// and reported when the registry is frozen with [`RegistryBuilder::build`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    types: BTreeMap<&'static str, TypeMeta>,
    enums: BTreeMap<&'static str, EnumMeta>,
    duplicates: Vec<RegistryError>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        RegistryBuilder::default()
    }

    pub fn declare_type(&mut self, meta: TypeMeta) -> &mut Self {
        let name = meta.name();
        if self.types.insert(name, meta).is_some() {
            self.duplicates.push(RegistryError::DuplicateType(name));
        }
        self
    }

    pub fn declare_enum(&mut self, meta: EnumMeta) -> &mut Self {
        let name = meta.name();
        if self.enums.insert(name, meta).is_some() {
            self.duplicates.push(RegistryError::DuplicateEnum(name));
        }
        self
    }

    /// Freeze the registry. Fails on the first duplicate declaration seen.
    pub fn build(mut self) -> Result<MetaRegistry, RegistryError> {
        if let Some(dup) = self.duplicates.drain(..).next() {
            return Err(dup);
        }
        Ok(MetaRegistry {
            types: self.types,
            enums: self.enums,
        })
    }
}

/// The frozen, shareable registry of conversion metadata.
///
/// Immutable after construction; safe to share across threads for the
/// process lifetime.
#[derive(Debug)]
pub struct MetaRegistry {
    types: BTreeMap<&'static str, TypeMeta>,
    enums: BTreeMap<&'static str, EnumMeta>,
}

impl MetaRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn type_meta(&self, name: &str) -> Option<&TypeMeta> {
        self.types.get(name)
    }

    pub fn enum_meta(&self, name: &str) -> Option<&EnumMeta> {
        self.enums.get(name)
    }

    /// Registered type names in sorted order.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.types.keys().copied()
    }

    /// Registered enum names in sorted order.
    pub fn enum_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.enums.keys().copied()
    }
}
