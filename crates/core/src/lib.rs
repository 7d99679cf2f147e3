//! gantry-core: conversion metadata model and typed JSON decoder.
//!
//! The Gantry REST service returns plain JSON; the generated API wrappers
//! need dates as canonical RFC 3339 strings and enums as their numeric
//! representation. Each generated contract type carries a small metadata
//! table (field name → conversion kind), and this crate provides the
//! decoder that walks a `serde_json::Value` and applies those conversions
//! in place.
//!
//! Metadata tables are collected into a [`MetaRegistry`] once at startup
//! and shared immutably; see [`registry`]. The decoder itself is a pure
//! recursive walk with no retained state, so a frozen registry may be used
//! from any number of threads concurrently.

pub mod date;
pub mod decode;
pub mod error;
pub mod meta;
pub mod registry;

pub use decode::{DecodeReport, MAX_DEPTH};
pub use error::{ConversionError, RegistryError, SchemaMismatch};
pub use meta::{EnumMeta, EnumValue, FieldRule, TypeMeta};
pub use registry::{MetaRegistry, RegistryBuilder};
