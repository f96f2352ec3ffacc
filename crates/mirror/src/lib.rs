// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # Mirror - value reflection facade
//!
//! Enumerates the named members of a structured value as a uniform sequence
//! of `(name, type, value)` triples, with lookup, typed conversion and a
//! shorthand renderer for fully qualified generic type names.
//!
//! ## Quick Start
//!
//! ```rust
//! use mirror::{impl_reflect, Mirror};
//!
//! struct Route {
//!     id: u32,
//!     stops: Vec<String>,
//!     operator: Option<String>,
//! }
//! impl_reflect!(Route as "transit.Route" { id, stops, operator });
//!
//! let mirror = Mirror::new(Route {
//!     id: 12,
//!     stops: vec!["north".into(), "south".into()],
//!     operator: None,
//! });
//!
//! for field in &mirror {
//!     println!("{}", field); // id: u32 = 12 ...
//! }
//!
//! assert_eq!(mirror.get::<u32>("id"), Some(12));
//! assert_eq!(mirror.short_type_names(), vec!["u32", "[String]", "String?"]);
//! assert_eq!(
//!     mirror::canonicalize("Module.Optional<Module.Array<Module.Foo>>"),
//!     "[Foo]?"
//! );
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------+
//! |  Reflect impl (std types, impl_reflect! for user structs)   |
//! +-------------------------------------------------------------+
//! |  Mirror<T>  -> ordered FieldItem snapshots                  |
//! |            -> lookup / typed get / mapping / projections    |
//! +-------------------------------------------------------------+
//! |  canonical: raw type name -> shorthand ([Foo]?, [Foo?])     |
//! +-------------------------------------------------------------+
//! |  property_list: best-effort JSON key-value persistence      |
//! +-------------------------------------------------------------+
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Mirror`] | Reflected view of one subject value |
//! | [`FieldItem`] | One member: name, type descriptor, value snapshot |
//! | [`Reflect`] | Capability a value provides to be reflected |
//! | [`DynamicValue`] | Owned dynamic value snapshot |
//! | [`RenderConfig`] | Type-name rendering options |
//!
//! ## Features
//!
//! - `config-loaders` (default): load [`RenderConfig`] from YAML
//! - `property-list` (default): JSON-backed [`PropertyList`] persistence

pub mod canonical;
pub mod config;
pub mod error;
pub mod mirror;
#[cfg(feature = "property-list")]
pub mod property_list;
pub mod reflect;

pub use canonical::{canonicalize, canonicalize_with, Wrapper};
pub use config::{ConfigError, RenderConfig};
pub use error::{MirrorError, Result};
pub use mirror::{FieldItem, Mirror};
#[cfg(feature = "property-list")]
pub use property_list::{PropertyList, PropertyListError};
pub use reflect::{
    DynamicValue, FieldDescriptor, FromDynamicValue, PrimitiveKind, RawField, Reflect,
    TypeDescriptor, TypeKind,
};

/// Reflect `subject`; shorthand for [`Mirror::new`].
pub fn reflect<T: Reflect>(subject: T) -> Mirror<T> {
    Mirror::new(subject)
}
