// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Reflection adapter.
//!
//! A [`Mirror`] owns one subject value and the ordered [`FieldItem`]s its
//! [`Reflect`] implementation reported when the mirror was built.
//!
//! # Ownership
//!
//! The subject is moved into the mirror, so a value type is reflected as a
//! structural copy. To reflect a shared object without copying it, pass an
//! `Arc<U>` (or `&U`); it is transparent and reports `U`'s name and members.
//! Either way every [`FieldItem`] holds an owned [`DynamicValue`] snapshot:
//! nothing done to the original object after reflection shows up in them.
//!
//! # Example
//!
//! ```rust
//! use mirror::{impl_reflect, Mirror};
//!
//! struct User {
//!     name: String,
//!     emails: Vec<String>,
//!     manager: Option<u64>,
//! }
//! impl_reflect!(User as "accounts.User" { name, emails, manager });
//!
//! let mirror = Mirror::new(User {
//!     name: "ada".into(),
//!     emails: vec![],
//!     manager: None,
//! });
//!
//! assert_eq!(mirror.name(), "accounts.User");
//! assert_eq!(mirror.short_name(), "User");
//! assert_eq!(mirror.child_count(), 3);
//! assert_eq!(mirror.short_type_names(), vec!["String", "[String]", "u64?"]);
//! assert_eq!(mirror.get::<String>("name").as_deref(), Some("ada"));
//! ```

mod field_item;
mod query;

pub use field_item::FieldItem;

use crate::canonical::{self, Wrapper};
use crate::config::RenderConfig;
use crate::reflect::{Reflect, TypeDescriptor};
use std::ops::Index;
use std::sync::Arc;

/// Reflected view of one subject value.
#[derive(Debug, Clone)]
pub struct Mirror<T> {
    subject: T,
    descriptor: Arc<TypeDescriptor>,
    children: Vec<FieldItem>,
}

impl<T: Reflect> Mirror<T> {
    /// Reflect `subject`. Never fails; a value without members yields an empty sequence.
    pub fn new(subject: T) -> Self {
        let descriptor = T::type_descriptor();
        let children: Vec<FieldItem> = subject
            .reflect_fields()
            .into_iter()
            .map(FieldItem::from)
            .collect();
        log::debug!(
            "[mirror] reflected {} ({} fields)",
            descriptor.name,
            children.len()
        );
        Self {
            subject,
            descriptor,
            children,
        }
    }
}

impl<T> Mirror<T> {
    /// Fully qualified type name of the subject, as reported.
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// Shorthand type name of the subject.
    pub fn short_name(&self) -> String {
        canonical::canonicalize(self.name())
    }

    /// Shorthand type name rendered with `config`.
    pub fn short_name_with(&self, config: &RenderConfig) -> String {
        canonical::canonicalize_with(self.name(), config)
    }

    /// Type descriptor of the subject.
    pub fn descriptor(&self) -> &Arc<TypeDescriptor> {
        &self.descriptor
    }

    /// The reflected subject.
    pub fn subject(&self) -> &T {
        &self.subject
    }

    /// Give the subject back.
    pub fn into_inner(self) -> T {
        self.subject
    }

    /// Number of members.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// `true` when the subject reported no members.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Members in declaration order.
    pub fn children(&self) -> &[FieldItem] {
        &self.children
    }

    /// Iterate over members; every call starts from the first one.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldItem> {
        self.children.iter()
    }

    /// Member at `index`.
    pub fn get_index(&self, index: usize) -> Option<&FieldItem> {
        self.children.get(index)
    }

    /// Size of the subject's own storage in bytes (not following pointers).
    pub fn memory_size(&self) -> usize {
        std::mem::size_of_val(&self.subject)
    }

    /// Wrapper named by the raw type name's outer token.
    pub fn wrapper(&self) -> Option<Wrapper> {
        canonical::outer_wrapper(self.name())
    }

    /// Subject is an `Optional<T>`.
    pub fn is_optional(&self) -> bool {
        self.wrapper() == Some(Wrapper::Optional)
    }

    /// Subject is an `Array<T>`.
    pub fn is_array(&self) -> bool {
        self.wrapper() == Some(Wrapper::Array)
    }

    /// Subject is a `Dictionary<K,V>`.
    pub fn is_dictionary(&self) -> bool {
        self.wrapper() == Some(Wrapper::Dictionary)
    }

    /// Subject is a `Set<T>`.
    pub fn is_set(&self) -> bool {
        self.wrapper() == Some(Wrapper::Set)
    }
}

impl<T> Index<usize> for Mirror<T> {
    type Output = FieldItem;

    fn index(&self, index: usize) -> &FieldItem {
        &self.children[index]
    }
}

impl<'a, T> IntoIterator for &'a Mirror<T> {
    type Item = &'a FieldItem;
    type IntoIter = std::slice::Iter<'a, FieldItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

#[cfg(test)]
mod tests;
