// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! [`Reflect`] implementations for primitives and std containers.
//!
//! Naming follows the wrapper vocabulary the canonicalizer understands:
//! `Option<T>` is `core.Optional<T>`, ordered collections are
//! `alloc.Array<T>`, maps are `std.Dictionary<K,V>`, sets are `std.Set<T>`.
//! Smart pointers and references are transparent.

use super::{DynamicValue, PrimitiveKind, RawField, Reflect, TypeDescriptor};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::mem::size_of;
use std::rc::Rc;
use std::sync::Arc;

macro_rules! impl_reflect_primitive {
    ($ty:ty, $kind:ident, $variant:ident) => {
        impl Reflect for $ty {
            fn type_descriptor() -> Arc<TypeDescriptor> {
                Arc::new(TypeDescriptor::primitive(PrimitiveKind::$kind, size_of::<$ty>()))
            }

            fn to_dynamic(&self) -> DynamicValue {
                DynamicValue::$variant(*self)
            }
        }
    };
}

impl_reflect_primitive!(bool, Bool, Bool);
impl_reflect_primitive!(u8, U8, U8);
impl_reflect_primitive!(u16, U16, U16);
impl_reflect_primitive!(u32, U32, U32);
impl_reflect_primitive!(u64, U64, U64);
impl_reflect_primitive!(u128, U128, U128);
impl_reflect_primitive!(i8, I8, I8);
impl_reflect_primitive!(i16, I16, I16);
impl_reflect_primitive!(i32, I32, I32);
impl_reflect_primitive!(i64, I64, I64);
impl_reflect_primitive!(i128, I128, I128);
impl_reflect_primitive!(f32, F32, F32);
impl_reflect_primitive!(f64, F64, F64);
impl_reflect_primitive!(char, Char, Char);

impl Reflect for usize {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        Arc::new(TypeDescriptor::primitive(PrimitiveKind::Usize, size_of::<usize>()))
    }

    fn to_dynamic(&self) -> DynamicValue {
        // usize is at most 64 bits on every supported target
        DynamicValue::U64(*self as u64)
    }
}

impl Reflect for isize {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        Arc::new(TypeDescriptor::primitive(PrimitiveKind::Isize, size_of::<isize>()))
    }

    fn to_dynamic(&self) -> DynamicValue {
        DynamicValue::I64(*self as i64)
    }
}

impl Reflect for String {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        Arc::new(TypeDescriptor::primitive(PrimitiveKind::String, size_of::<String>()))
    }

    fn to_dynamic(&self) -> DynamicValue {
        DynamicValue::String(self.clone())
    }
}

impl Reflect for () {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        Arc::new(TypeDescriptor::primitive(PrimitiveKind::Unit, 0))
    }

    fn to_dynamic(&self) -> DynamicValue {
        DynamicValue::Unit
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        Arc::new(TypeDescriptor::optional(
            T::type_descriptor(),
            size_of::<Option<T>>(),
        ))
    }

    fn reflect_fields(&self) -> Vec<RawField> {
        match self {
            Some(inner) => vec![RawField::labeled("some", inner)],
            None => Vec::new(),
        }
    }

    fn to_dynamic(&self) -> DynamicValue {
        DynamicValue::Optional(self.as_ref().map(|v| Box::new(v.to_dynamic())))
    }
}

macro_rules! impl_reflect_sequence {
    ($($ty:ident),*) => {$(
        impl<T: Reflect> Reflect for $ty<T> {
            fn type_descriptor() -> Arc<TypeDescriptor> {
                Arc::new(TypeDescriptor::array(T::type_descriptor(), size_of::<$ty<T>>()))
            }

            fn reflect_fields(&self) -> Vec<RawField> {
                self.iter().map(RawField::unlabeled).collect()
            }

            fn to_dynamic(&self) -> DynamicValue {
                DynamicValue::Sequence(self.iter().map(Reflect::to_dynamic).collect())
            }
        }
    )*};
}

impl_reflect_sequence!(Vec, VecDeque);

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        Arc::new(TypeDescriptor::array(T::type_descriptor(), size_of::<[T; N]>()))
    }

    fn reflect_fields(&self) -> Vec<RawField> {
        self.iter().map(RawField::unlabeled).collect()
    }

    fn to_dynamic(&self) -> DynamicValue {
        DynamicValue::Sequence(self.iter().map(Reflect::to_dynamic).collect())
    }
}

macro_rules! impl_reflect_map {
    ($($ty:ident),*) => {$(
        impl<K: Reflect, V: Reflect> Reflect for $ty<K, V> {
            fn type_descriptor() -> Arc<TypeDescriptor> {
                Arc::new(TypeDescriptor::dictionary(
                    K::type_descriptor(),
                    V::type_descriptor(),
                    size_of::<$ty<K, V>>(),
                ))
            }

            fn reflect_fields(&self) -> Vec<RawField> {
                let entry_type = <(K, V)>::type_descriptor();
                self.iter()
                    .map(|(k, v)| RawField {
                        label: None,
                        type_desc: entry_type.clone(),
                        value: DynamicValue::Tuple(vec![k.to_dynamic(), v.to_dynamic()]),
                    })
                    .collect()
            }

            fn to_dynamic(&self) -> DynamicValue {
                DynamicValue::Map(
                    self.iter()
                        .map(|(k, v)| (k.to_dynamic(), v.to_dynamic()))
                        .collect(),
                )
            }
        }
    )*};
}

impl_reflect_map!(HashMap, BTreeMap);

macro_rules! impl_reflect_set {
    ($($ty:ident),*) => {$(
        impl<T: Reflect> Reflect for $ty<T> {
            fn type_descriptor() -> Arc<TypeDescriptor> {
                Arc::new(TypeDescriptor::set(T::type_descriptor(), size_of::<$ty<T>>()))
            }

            fn reflect_fields(&self) -> Vec<RawField> {
                self.iter().map(RawField::unlabeled).collect()
            }

            fn to_dynamic(&self) -> DynamicValue {
                DynamicValue::Set(self.iter().map(Reflect::to_dynamic).collect())
            }
        }
    )*};
}

impl_reflect_set!(HashSet, BTreeSet);

macro_rules! impl_reflect_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: Reflect),+> Reflect for ($($name,)+) {
            fn type_descriptor() -> Arc<TypeDescriptor> {
                Arc::new(TypeDescriptor::tuple(
                    vec![$($name::type_descriptor()),+],
                    size_of::<($($name,)+)>(),
                ))
            }

            fn reflect_fields(&self) -> Vec<RawField> {
                vec![$(RawField::unlabeled(&self.$idx)),+]
            }

            fn to_dynamic(&self) -> DynamicValue {
                DynamicValue::Tuple(vec![$(self.$idx.to_dynamic()),+])
            }
        }
    };
}

impl_reflect_tuple!(A: 0);
impl_reflect_tuple!(A: 0, B: 1);
impl_reflect_tuple!(A: 0, B: 1, C: 2);
impl_reflect_tuple!(A: 0, B: 1, C: 2, D: 3);

macro_rules! impl_reflect_pointer {
    ($($ty:ident),*) => {$(
        impl<T: Reflect> Reflect for $ty<T> {
            fn type_descriptor() -> Arc<TypeDescriptor> {
                T::type_descriptor()
            }

            fn reflect_fields(&self) -> Vec<RawField> {
                (**self).reflect_fields()
            }

            fn to_dynamic(&self) -> DynamicValue {
                (**self).to_dynamic()
            }
        }
    )*};
}

impl_reflect_pointer!(Box, Rc, Arc);

impl<T: Reflect> Reflect for &T {
    fn type_descriptor() -> Arc<TypeDescriptor> {
        T::type_descriptor()
    }

    fn reflect_fields(&self) -> Vec<RawField> {
        (**self).reflect_fields()
    }

    fn to_dynamic(&self) -> DynamicValue {
        (**self).to_dynamic()
    }
}
