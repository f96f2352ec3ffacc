// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Lookups and projections over a mirror's members.

use super::{FieldItem, Mirror};
use crate::canonical;
use crate::config::RenderConfig;
use crate::error::MirrorError;
use crate::reflect::{DynamicValue, FromDynamicValue, TypeDescriptor};
use std::collections::HashMap;
use std::sync::Arc;

impl<T> Mirror<T> {
    /// First member named `key`, in declaration order.
    pub fn field(&self, key: &str) -> Option<&FieldItem> {
        self.children.iter().find(|item| item.name() == key)
    }

    /// Value of the first member named `key`.
    pub fn value_of(&self, key: &str) -> Option<&DynamicValue> {
        self.field(key).map(FieldItem::value)
    }

    /// Value of `key` narrowed to `U`.
    ///
    /// `None` both when the member is missing and when it holds another
    /// type; use [`Mirror::try_get`] to tell the two apart.
    pub fn get<U: FromDynamicValue>(&self, key: &str) -> Option<U> {
        self.try_get(key).ok()
    }

    /// Value of `key` narrowed to `U`, reporting why it is unavailable.
    pub fn try_get<U: FromDynamicValue>(&self, key: &str) -> Result<U, MirrorError> {
        let item = self
            .field(key)
            .ok_or_else(|| MirrorError::FieldNotFound(key.to_string()))?;
        U::from_dynamic(item.value())
    }

    /// Name → value mapping. Duplicate names keep the last declared value.
    pub fn to_mapping(&self) -> HashMap<String, DynamicValue> {
        let mut result = HashMap::with_capacity(self.children.len());
        for item in &self.children {
            result.insert(item.name().to_string(), item.value().clone());
        }
        result
    }

    /// Member names.
    pub fn names(&self) -> Vec<&str> {
        self.children.iter().map(FieldItem::name).collect()
    }

    /// Member values.
    pub fn values(&self) -> Vec<&DynamicValue> {
        self.children.iter().map(FieldItem::value).collect()
    }

    /// Member types.
    pub fn types(&self) -> Vec<&Arc<TypeDescriptor>> {
        self.children.iter().map(FieldItem::type_descriptor).collect()
    }

    /// Shorthand member type names.
    pub fn short_type_names(&self) -> Vec<String> {
        self.children.iter().map(FieldItem::short_type_name).collect()
    }

    /// Member type names rendered with `config`.
    pub fn short_type_names_with(&self, config: &RenderConfig) -> Vec<String> {
        self.children
            .iter()
            .map(|item| canonical::canonicalize_with(item.type_name(), config))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::{RawField, Reflect};

    /// Subject whose members are supplied verbatim, duplicates included.
    struct Fields(Vec<RawField>);

    impl Reflect for Fields {
        fn type_descriptor() -> Arc<TypeDescriptor> {
            Arc::new(TypeDescriptor::struct_type("test.Fields", Vec::new(), 0))
        }

        fn reflect_fields(&self) -> Vec<RawField> {
            self.0.clone()
        }

        fn to_dynamic(&self) -> DynamicValue {
            DynamicValue::Struct(Vec::new())
        }
    }

    fn a1_bx() -> Mirror<Fields> {
        Mirror::new(Fields(vec![
            RawField::labeled("a", &1i32),
            RawField::labeled("b", &"x".to_string()),
        ]))
    }

    #[test]
    fn test_field_lookup() {
        let mirror = a1_bx();
        let a = mirror.field("a").expect("field a");
        assert_eq!(a.value(), &DynamicValue::I32(1));
        assert!(mirror.field("z").is_none());
        assert_eq!(mirror.value_of("b").and_then(|v| v.as_str()), Some("x"));
    }

    #[test]
    fn test_typed_lookup_collapses_absence() {
        let mirror = a1_bx();
        assert_eq!(mirror.get::<i32>("a"), Some(1));
        assert_eq!(mirror.get::<String>("a"), None);
        assert_eq!(mirror.get::<i32>("z"), None);
    }

    #[test]
    fn test_try_get_distinguishes() {
        let mirror = a1_bx();
        assert_eq!(mirror.try_get::<String>("b"), Ok("x".to_string()));
        assert_eq!(
            mirror.try_get::<i32>("z"),
            Err(MirrorError::FieldNotFound("z".to_string()))
        );
        assert!(matches!(
            mirror.try_get::<bool>("a"),
            Err(MirrorError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_to_mapping_last_write_wins() {
        let mirror = Mirror::new(Fields(vec![
            RawField::labeled("a", &1i32),
            RawField::labeled("a", &2i32),
        ]));
        let mapping = mirror.to_mapping();
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("a"), Some(&DynamicValue::I32(2)));

        // lookup still returns the first declared member
        assert_eq!(mirror.get::<i32>("a"), Some(1));
    }

    #[test]
    fn test_projections_preserve_order() {
        let mirror = a1_bx();
        assert_eq!(mirror.names(), vec!["a", "b"]);
        assert_eq!(
            mirror.values(),
            vec![&DynamicValue::I32(1), &DynamicValue::String("x".into())]
        );
        let types: Vec<&str> = mirror.types().into_iter().map(|t| t.name.as_str()).collect();
        assert_eq!(types, vec!["core.i32", "alloc.String"]);
        assert_eq!(mirror.short_type_names(), vec!["i32", "String"]);

        let keep = RenderConfig {
            strip_qualifiers: false,
            ..RenderConfig::default()
        };
        assert_eq!(
            mirror.short_type_names_with(&keep),
            vec!["core.i32", "alloc.String"]
        );
    }
}
