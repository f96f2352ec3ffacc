// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic value types.

use crate::error::MirrorError;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// An owned snapshot of any reflected value.
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicValue {
    // Primitives
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    F32(f32),
    F64(f64),
    Char(char),
    String(String),

    // Composites
    Optional(Option<Box<DynamicValue>>),
    Sequence(Vec<DynamicValue>),
    Tuple(Vec<DynamicValue>),
    Map(Vec<(DynamicValue, DynamicValue)>),
    Set(Vec<DynamicValue>),
    Struct(Vec<(String, DynamicValue)>), // declaration order
    Enum(i64, String),                   // (discriminant, variant_name)

    // Special
    Unit,
}

impl DynamicValue {
    /// Short name of the value's variant, used in mismatch reports.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::U128(_) => "u128",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::I128(_) => "i128",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Char(_) => "char",
            Self::String(_) => "String",
            Self::Optional(_) => "Optional",
            Self::Sequence(_) => "Sequence",
            Self::Tuple(_) => "Tuple",
            Self::Map(_) => "Map",
            Self::Set(_) => "Set",
            Self::Struct(_) => "Struct",
            Self::Enum(_, _) => "Enum",
            Self::Unit => "Unit",
        }
    }

    /// Check if value is an empty optional.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::Optional(None))
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as u32.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Self::U32(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as u64.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::U64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::I32(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as sequence.
    pub fn as_sequence(&self) -> Option<&[DynamicValue]> {
        match self {
            Self::Sequence(v) | Self::Set(v) | Self::Tuple(v) => Some(v),
            _ => None,
        }
    }

    /// Unwrap one level of `Optional`; `None` for an empty optional or a non-optional.
    pub fn as_some(&self) -> Option<&DynamicValue> {
        match self {
            Self::Optional(v) => v.as_deref(),
            _ => None,
        }
    }

    /// Try to get struct field.
    pub fn get_field(&self, name: &str) -> Option<&DynamicValue> {
        match self {
            Self::Struct(fields) => fields.iter().find(|(k, _)| k == name).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Get enum variant name.
    pub fn enum_variant(&self) -> Option<&str> {
        match self {
            Self::Enum(_, name) => Some(name),
            _ => None,
        }
    }
}

fn write_list<'a>(
    f: &mut fmt::Formatter<'_>,
    open: &str,
    close: &str,
    items: impl Iterator<Item = &'a DynamicValue>,
) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str(close)
}

impl fmt::Display for DynamicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::U8(v) => write!(f, "{}", v),
            Self::U16(v) => write!(f, "{}", v),
            Self::U32(v) => write!(f, "{}", v),
            Self::U64(v) => write!(f, "{}", v),
            Self::U128(v) => write!(f, "{}", v),
            Self::I8(v) => write!(f, "{}", v),
            Self::I16(v) => write!(f, "{}", v),
            Self::I32(v) => write!(f, "{}", v),
            Self::I64(v) => write!(f, "{}", v),
            Self::I128(v) => write!(f, "{}", v),
            Self::F32(v) => write!(f, "{}", v),
            Self::F64(v) => write!(f, "{}", v),
            Self::Char(v) => write!(f, "{:?}", v),
            Self::String(v) => write!(f, "{:?}", v),
            Self::Optional(Some(v)) => write!(f, "Some({})", v),
            Self::Optional(None) => f.write_str("None"),
            Self::Sequence(items) => write_list(f, "[", "]", items.iter()),
            Self::Tuple(items) => write_list(f, "(", ")", items.iter()),
            Self::Set(items) => write_list(f, "{", "}", items.iter()),
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                f.write_str("}")
            }
            Self::Struct(fields) => {
                f.write_str("{")?;
                for (i, (k, v)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                f.write_str("}")
            }
            Self::Enum(_, name) => f.write_str(name),
            Self::Unit => f.write_str("()"),
        }
    }
}

// Conversion traits
macro_rules! impl_from_primitive {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for DynamicValue {
            fn from(v: $ty) -> Self {
                Self::$variant(v)
            }
        }
    };
}

impl_from_primitive!(bool, Bool);
impl_from_primitive!(u8, U8);
impl_from_primitive!(u16, U16);
impl_from_primitive!(u32, U32);
impl_from_primitive!(u64, U64);
impl_from_primitive!(u128, U128);
impl_from_primitive!(i8, I8);
impl_from_primitive!(i16, I16);
impl_from_primitive!(i32, I32);
impl_from_primitive!(i64, I64);
impl_from_primitive!(i128, I128);
impl_from_primitive!(f32, F32);
impl_from_primitive!(f64, F64);
impl_from_primitive!(char, Char);
impl_from_primitive!(String, String);

impl From<&str> for DynamicValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl<T: Into<DynamicValue>> From<Vec<T>> for DynamicValue {
    fn from(v: Vec<T>) -> Self {
        Self::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<DynamicValue>> From<Option<T>> for DynamicValue {
    fn from(v: Option<T>) -> Self {
        Self::Optional(v.map(|inner| Box::new(inner.into())))
    }
}

/// Narrowing from a [`DynamicValue`] to a concrete Rust type.
///
/// Narrowing is exact: an `I32` does not narrow to `i64`.
pub trait FromDynamicValue: Sized {
    fn from_dynamic(value: &DynamicValue) -> Result<Self, MirrorError>;
}

fn mismatch<T>(value: &DynamicValue) -> MirrorError {
    MirrorError::TypeMismatch {
        expected: std::any::type_name::<T>().to_string(),
        got: value.kind_name().to_string(),
    }
}

macro_rules! impl_from_dynamic {
    ($ty:ty, $variant:ident) => {
        impl FromDynamicValue for $ty {
            fn from_dynamic(value: &DynamicValue) -> Result<Self, MirrorError> {
                match value {
                    DynamicValue::$variant(v) => Ok(*v),
                    other => Err(mismatch::<$ty>(other)),
                }
            }
        }
    };
}

impl_from_dynamic!(bool, Bool);
impl_from_dynamic!(u8, U8);
impl_from_dynamic!(u16, U16);
impl_from_dynamic!(u32, U32);
impl_from_dynamic!(u64, U64);
impl_from_dynamic!(u128, U128);
impl_from_dynamic!(i8, I8);
impl_from_dynamic!(i16, I16);
impl_from_dynamic!(i32, I32);
impl_from_dynamic!(i64, I64);
impl_from_dynamic!(i128, I128);
impl_from_dynamic!(f32, F32);
impl_from_dynamic!(f64, F64);
impl_from_dynamic!(char, Char);

impl FromDynamicValue for usize {
    fn from_dynamic(value: &DynamicValue) -> Result<Self, MirrorError> {
        match value {
            DynamicValue::U64(v) => usize::try_from(*v).map_err(|_| mismatch::<usize>(value)),
            other => Err(mismatch::<usize>(other)),
        }
    }
}

impl FromDynamicValue for isize {
    fn from_dynamic(value: &DynamicValue) -> Result<Self, MirrorError> {
        match value {
            DynamicValue::I64(v) => isize::try_from(*v).map_err(|_| mismatch::<isize>(value)),
            other => Err(mismatch::<isize>(other)),
        }
    }
}

impl FromDynamicValue for String {
    fn from_dynamic(value: &DynamicValue) -> Result<Self, MirrorError> {
        match value {
            DynamicValue::String(s) => Ok(s.clone()),
            other => Err(mismatch::<String>(other)),
        }
    }
}

impl FromDynamicValue for () {
    fn from_dynamic(value: &DynamicValue) -> Result<Self, MirrorError> {
        match value {
            DynamicValue::Unit => Ok(()),
            other => Err(mismatch::<()>(other)),
        }
    }
}

impl FromDynamicValue for DynamicValue {
    fn from_dynamic(value: &DynamicValue) -> Result<Self, MirrorError> {
        Ok(value.clone())
    }
}

impl<T: FromDynamicValue> FromDynamicValue for Option<T> {
    fn from_dynamic(value: &DynamicValue) -> Result<Self, MirrorError> {
        match value {
            DynamicValue::Optional(None) => Ok(None),
            DynamicValue::Optional(Some(inner)) => T::from_dynamic(inner).map(Some),
            other => Err(mismatch::<Option<T>>(other)),
        }
    }
}

impl<T: FromDynamicValue> FromDynamicValue for Vec<T> {
    fn from_dynamic(value: &DynamicValue) -> Result<Self, MirrorError> {
        match value {
            DynamicValue::Sequence(items) => items.iter().map(T::from_dynamic).collect(),
            other => Err(mismatch::<Vec<T>>(other)),
        }
    }
}

impl<K, V> FromDynamicValue for HashMap<K, V>
where
    K: FromDynamicValue + Eq + Hash,
    V: FromDynamicValue,
{
    fn from_dynamic(value: &DynamicValue) -> Result<Self, MirrorError> {
        match value {
            DynamicValue::Map(entries) => entries
                .iter()
                .map(|(k, v)| -> Result<(K, V), MirrorError> {
                    Ok((K::from_dynamic(k)?, V::from_dynamic(v)?))
                })
                .collect(),
            other => Err(mismatch::<HashMap<K, V>>(other)),
        }
    }
}

impl<K, V> FromDynamicValue for BTreeMap<K, V>
where
    K: FromDynamicValue + Ord,
    V: FromDynamicValue,
{
    fn from_dynamic(value: &DynamicValue) -> Result<Self, MirrorError> {
        match value {
            DynamicValue::Map(entries) => entries
                .iter()
                .map(|(k, v)| -> Result<(K, V), MirrorError> {
                    Ok((K::from_dynamic(k)?, V::from_dynamic(v)?))
                })
                .collect(),
            other => Err(mismatch::<BTreeMap<K, V>>(other)),
        }
    }
}

impl<T: FromDynamicValue + Eq + Hash> FromDynamicValue for HashSet<T> {
    fn from_dynamic(value: &DynamicValue) -> Result<Self, MirrorError> {
        match value {
            DynamicValue::Set(items) => items.iter().map(T::from_dynamic).collect(),
            other => Err(mismatch::<HashSet<T>>(other)),
        }
    }
}

impl<T: FromDynamicValue + Ord> FromDynamicValue for BTreeSet<T> {
    fn from_dynamic(value: &DynamicValue) -> Result<Self, MirrorError> {
        match value {
            DynamicValue::Set(items) => items.iter().map(T::from_dynamic).collect(),
            other => Err(mismatch::<BTreeSet<T>>(other)),
        }
    }
}
