// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Reflection primitive.
//!
//! Rust has no runtime facility that walks a value's fields, so the
//! capability is injected through the [`Reflect`] trait: a value reports its
//! [`TypeDescriptor`], its direct members as ordered [`RawField`]s, and an
//! owned [`DynamicValue`] snapshot of itself.
//!
//! # Features
//!
//! - **Std coverage**: primitives, `String`, `Option`, `Vec`, `VecDeque`,
//!   arrays, hash/btree maps and sets, tuples, `Box`/`Rc`/`Arc`
//! - **Explicit registration**: [`impl_reflect!`](crate::impl_reflect) for user structs
//! - **Deterministic**: same shape, same fields, same order on every call
//!
//! # Example
//!
//! ```rust
//! use mirror::{impl_reflect, Reflect};
//!
//! struct Sensor {
//!     id: u32,
//!     label: Option<String>,
//! }
//!
//! impl_reflect!(Sensor as "telemetry.Sensor" { id, label });
//!
//! let sensor = Sensor { id: 7, label: None };
//! let fields = sensor.reflect_fields();
//! assert_eq!(fields[0].label.as_deref(), Some("id"));
//! assert_eq!(Sensor::type_descriptor().name, "telemetry.Sensor");
//! ```

mod std_impls;
mod type_descriptor;
mod value;

pub use type_descriptor::{FieldDescriptor, PrimitiveKind, TypeDescriptor, TypeKind};
pub use value::{DynamicValue, FromDynamicValue};

use std::sync::Arc;

/// Capability a value must provide to be reflected.
pub trait Reflect {
    /// Descriptor of the implementing type, carrying its fully qualified name.
    fn type_descriptor() -> Arc<TypeDescriptor>
    where
        Self: Sized;

    /// Direct members in declaration order. Leaf values have none.
    fn reflect_fields(&self) -> Vec<RawField> {
        Vec::new()
    }

    /// Owned snapshot of the value.
    fn to_dynamic(&self) -> DynamicValue;
}

/// One member as reported by a [`Reflect`] implementation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawField {
    /// Declared name; `None` for positional members and collection elements.
    pub label: Option<String>,
    /// Member type.
    pub type_desc: Arc<TypeDescriptor>,
    /// Member value at reflection time.
    pub value: DynamicValue,
}

impl RawField {
    /// Reflect `value` as a member.
    pub fn new<T: Reflect>(label: Option<&str>, value: &T) -> Self {
        Self {
            label: label.map(str::to_string),
            type_desc: T::type_descriptor(),
            value: value.to_dynamic(),
        }
    }

    /// Named member.
    pub fn labeled<T: Reflect>(label: &str, value: &T) -> Self {
        Self::new(Some(label), value)
    }

    /// Positional member.
    pub fn unlabeled<T: Reflect>(value: &T) -> Self {
        Self::new(None, value)
    }
}

/// Turn a `module_path!()` and a type identifier into a dotted qualified name.
///
/// `qualified_name("app::models", "User")` is `"app.models.User"`.
pub fn qualified_name(module_path: &str, ident: &str) -> String {
    let mut name = module_path.replace("::", ".");
    if !name.is_empty() {
        name.push('.');
    }
    name.push_str(ident);
    name
}

/// Describe a struct field from an accessor; used by [`impl_reflect!`](crate::impl_reflect).
pub fn field_descriptor<S, T, A>(name: &str, _accessor: A) -> FieldDescriptor
where
    T: Reflect,
    A: Fn(&S) -> &T,
{
    FieldDescriptor::new(name, T::type_descriptor())
}

/// Implement [`Reflect`] for a struct with named fields.
///
/// The qualified name defaults to the invoking module's path; `as "Name"`
/// overrides it. Every listed field's type must implement [`Reflect`].
///
/// ```rust
/// use mirror::{impl_reflect, Mirror};
///
/// struct Point { x: i32, y: i32 }
/// impl_reflect!(Point { x, y });
///
/// let mirror = Mirror::new(Point { x: 1, y: 2 });
/// assert_eq!(mirror.short_name(), "Point");
/// assert_eq!(mirror.names(), vec!["x", "y"]);
/// ```
#[macro_export]
macro_rules! impl_reflect {
    (@impl $ty:ident, $name:expr, { $($field:ident),* }) => {
        impl $crate::Reflect for $ty {
            fn type_descriptor() -> ::std::sync::Arc<$crate::TypeDescriptor> {
                ::std::sync::Arc::new($crate::TypeDescriptor::struct_type(
                    $name,
                    vec![$($crate::reflect::field_descriptor(
                        stringify!($field),
                        |s: &$ty| &s.$field,
                    )),*],
                    ::std::mem::size_of::<$ty>(),
                ))
            }

            fn reflect_fields(&self) -> ::std::vec::Vec<$crate::RawField> {
                vec![$($crate::RawField::labeled(stringify!($field), &self.$field)),*]
            }

            fn to_dynamic(&self) -> $crate::DynamicValue {
                $crate::DynamicValue::Struct(vec![$((
                    ::std::string::String::from(stringify!($field)),
                    $crate::Reflect::to_dynamic(&self.$field),
                )),*])
            }
        }
    };
    ($ty:ident as $name:literal { $($field:ident),* $(,)? }) => {
        $crate::impl_reflect!(@impl $ty, $name, { $($field),* });
    };
    ($ty:ident { $($field:ident),* $(,)? }) => {
        $crate::impl_reflect!(
            @impl $ty,
            $crate::reflect::qualified_name(module_path!(), stringify!($ty)),
            { $($field),* }
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Empty {}
    crate::impl_reflect!(Empty {});

    struct Reading {
        sensor_id: u32,
        samples: Vec<f64>,
        note: Option<String>,
    }
    crate::impl_reflect!(Reading as "telemetry.Reading" { sensor_id, samples, note });

    #[test]
    fn test_qualified_name() {
        assert_eq!(qualified_name("app::models", "User"), "app.models.User");
        assert_eq!(qualified_name("", "User"), "User");
    }

    #[test]
    fn test_macro_descriptor() {
        let desc = Reading::type_descriptor();
        assert_eq!(desc.name, "telemetry.Reading");
        assert_eq!(desc.size, std::mem::size_of::<Reading>());

        let fields = desc.fields().expect("struct fields");
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[1].name, "samples");
        assert_eq!(fields[1].type_desc.name, "alloc.Array<core.f64>");
        assert_eq!(fields[2].type_desc.name, "core.Optional<alloc.String>");
    }

    #[test]
    fn test_macro_fields_and_snapshot() {
        let reading = Reading {
            sensor_id: 9,
            samples: vec![1.5, 2.5],
            note: Some("ok".to_string()),
        };

        let fields = reading.reflect_fields();
        let labels: Vec<_> = fields.iter().map(|f| f.label.as_deref()).collect();
        assert_eq!(labels, vec![Some("sensor_id"), Some("samples"), Some("note")]);
        assert_eq!(fields[0].value, DynamicValue::U32(9));

        let value = reading.to_dynamic();
        assert_eq!(value.get_field("sensor_id"), Some(&DynamicValue::U32(9)));
        assert_eq!(
            value.get_field("note").and_then(|n| n.as_some()).and_then(|n| n.as_str()),
            Some("ok")
        );
    }

    #[test]
    fn test_default_qualified_name_uses_module_path() {
        let desc = Empty::type_descriptor();
        assert_eq!(desc.name, "mirror.reflect.tests.Empty");
        assert!(Empty {}.reflect_fields().is_empty());
        assert_eq!(Empty {}.to_dynamic(), DynamicValue::Struct(Vec::new()));
    }
}
