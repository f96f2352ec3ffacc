// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! One reflected member.

use crate::reflect::{DynamicValue, RawField, TypeDescriptor};
use std::fmt;
use std::sync::Arc;

/// A named member of a reflected value, captured at reflection time.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldItem {
    name: String,
    type_descriptor: Arc<TypeDescriptor>,
    value: DynamicValue,
}

impl FieldItem {
    /// Create a field item.
    pub fn new(
        name: impl Into<String>,
        type_descriptor: Arc<TypeDescriptor>,
        value: DynamicValue,
    ) -> Self {
        Self {
            name: name.into(),
            type_descriptor,
            value,
        }
    }

    /// Declared name; empty for unlabeled members.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member type.
    pub fn type_descriptor(&self) -> &Arc<TypeDescriptor> {
        &self.type_descriptor
    }

    /// Fully qualified member type name.
    pub fn type_name(&self) -> &str {
        &self.type_descriptor.name
    }

    /// Shorthand member type name.
    pub fn short_type_name(&self) -> String {
        self.type_descriptor.short_name()
    }

    /// Snapshot of the member value.
    pub fn value(&self) -> &DynamicValue {
        &self.value
    }

    /// Into inner value.
    pub fn into_value(self) -> DynamicValue {
        self.value
    }
}

impl From<RawField> for FieldItem {
    fn from(raw: RawField) -> Self {
        Self {
            name: raw.label.unwrap_or_default(),
            type_descriptor: raw.type_desc,
            value: raw.value,
        }
    }
}

impl fmt::Display for FieldItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} = {}", self.name, self.short_type_name(), self.value)
    }
}
