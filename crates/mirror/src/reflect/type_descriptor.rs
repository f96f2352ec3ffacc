// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors for runtime type information.

use crate::canonical;
use std::sync::Arc;

/// Primitive type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    U8,
    U16,
    U32,
    U64,
    U128,
    I8,
    I16,
    I32,
    I64,
    I128,
    Usize,
    Isize,
    F32,
    F64,
    Char,
    String,
    Unit,
}

impl PrimitiveKind {
    /// Identifier used in qualified type names.
    pub fn ident(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Usize => "usize",
            Self::Isize => "isize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Char => "char",
            Self::String => "String",
            Self::Unit => "Unit",
        }
    }

    /// Module the primitive lives in (`alloc` for owned strings, `core` otherwise).
    pub fn module(&self) -> &'static str {
        match self {
            Self::String => "alloc",
            _ => "core",
        }
    }
}

/// Type kind enumeration.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    /// Primitive type.
    Primitive(PrimitiveKind),
    /// Struct with named fields, in declaration order.
    Struct(Vec<FieldDescriptor>),
    /// `Optional<T>`.
    Optional(Arc<TypeDescriptor>),
    /// `Array<T>` (any ordered homogeneous collection).
    Array(Arc<TypeDescriptor>),
    /// `Dictionary<K,V>`.
    Dictionary(Arc<TypeDescriptor>, Arc<TypeDescriptor>),
    /// `Set<T>`.
    Set(Arc<TypeDescriptor>),
    /// Positional members.
    Tuple(Vec<Arc<TypeDescriptor>>),
    /// A type whose layout is not described beyond its name.
    Opaque,
}

/// A complete type descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    /// Fully qualified type name (`.`-separated module path).
    pub name: String,
    /// Type kind.
    pub kind: TypeKind,
    /// In-memory size of a value of this type, in bytes.
    pub size: usize,
}

impl TypeDescriptor {
    /// Create a new type descriptor.
    pub fn new(name: impl Into<String>, kind: TypeKind, size: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            size,
        }
    }

    /// Create a primitive type descriptor.
    pub fn primitive(kind: PrimitiveKind, size: usize) -> Self {
        let name = format!("{}.{}", kind.module(), kind.ident());
        Self::new(name, TypeKind::Primitive(kind), size)
    }

    /// Create a struct type descriptor.
    pub fn struct_type(name: impl Into<String>, fields: Vec<FieldDescriptor>, size: usize) -> Self {
        Self::new(name, TypeKind::Struct(fields), size)
    }

    /// `core.Optional<inner>`.
    pub fn optional(inner: Arc<TypeDescriptor>, size: usize) -> Self {
        let name = format!("core.Optional<{}>", inner.name);
        Self::new(name, TypeKind::Optional(inner), size)
    }

    /// `alloc.Array<element>`.
    pub fn array(element: Arc<TypeDescriptor>, size: usize) -> Self {
        let name = format!("alloc.Array<{}>", element.name);
        Self::new(name, TypeKind::Array(element), size)
    }

    /// `std.Dictionary<key,value>`.
    pub fn dictionary(key: Arc<TypeDescriptor>, value: Arc<TypeDescriptor>, size: usize) -> Self {
        let name = format!("std.Dictionary<{},{}>", key.name, value.name);
        Self::new(name, TypeKind::Dictionary(key, value), size)
    }

    /// `std.Set<element>`.
    pub fn set(element: Arc<TypeDescriptor>, size: usize) -> Self {
        let name = format!("std.Set<{}>", element.name);
        Self::new(name, TypeKind::Set(element), size)
    }

    /// `core.Tuple<a,b,..>`.
    pub fn tuple(elements: Vec<Arc<TypeDescriptor>>, size: usize) -> Self {
        let args: Vec<&str> = elements.iter().map(|e| e.name.as_str()).collect();
        let name = format!("core.Tuple<{}>", args.join(","));
        Self::new(name, TypeKind::Tuple(elements), size)
    }

    /// Shorthand rendering of [`Self::name`].
    pub fn short_name(&self) -> String {
        canonical::canonicalize(&self.name)
    }

    /// Check if this is a primitive type.
    pub fn is_primitive(&self) -> bool {
        matches!(self.kind, TypeKind::Primitive(_))
    }

    /// Check if this is a struct type.
    pub fn is_struct(&self) -> bool {
        matches!(self.kind, TypeKind::Struct(_))
    }

    /// Get fields if this is a struct.
    pub fn fields(&self) -> Option<&[FieldDescriptor]> {
        match &self.kind {
            TypeKind::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Get field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields()?.iter().find(|f| f.name == name)
    }
}

/// Field descriptor for struct members.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Field type.
    pub type_desc: Arc<TypeDescriptor>,
}

impl FieldDescriptor {
    /// Create a new field descriptor.
    pub fn new(name: impl Into<String>, type_desc: Arc<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            type_desc,
        }
    }
}
