// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Traits connecting Rust types to their metadata.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    net::IpAddr,
    sync::Arc
};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use super::{
    class::ClassMeta,
    types::{NativeType, TypeKind, TypeRef}
};
use crate::value::{Counter, Decimal};

/// A Rust type that can be declared as a field type.
///
/// Implemented for the natively supported scalars, the standard collections,
/// [`Option`] (nullability does not change the column type) and every type
/// deriving `Mapped`.
pub trait MappedType {
    /// Declared type description.
    fn type_ref() -> TypeRef;
}

/// A Rust type described by class metadata.
///
/// Generated by `#[derive(Entity)]` and `#[derive(Mapped)]` on structs.
pub trait MappedClass {
    /// Class description, built once and shared.
    fn class_meta() -> Arc<ClassMeta>;
}

macro_rules! native {
    ($($ty:ty => $native:ident),* $(,)?) => {
        $(
            impl MappedType for $ty {
                fn type_ref() -> TypeRef {
                    TypeRef::native(NativeType::$native)
                }
            }
        )*
    };
}

native! {
    bool => Boolean,
    i8 => TinyInt,
    i16 => SmallInt,
    i32 => Int,
    i64 => BigInt,
    i128 => Varint,
    f32 => Float,
    f64 => Double,
    String => Text,
    Uuid => Uuid,
    DateTime<Utc> => Timestamp,
    NaiveDate => Date,
    NaiveTime => Time,
    IpAddr => Inet,
    Decimal => Decimal
}

impl MappedType for Counter {
    fn type_ref() -> TypeRef {
        TypeRef::counter()
    }
}

impl MappedType for serde_json::Value {
    fn type_ref() -> TypeRef {
        TypeRef::object("serde_json::Value")
    }
}

impl<T: MappedType> MappedType for Option<T> {
    fn type_ref() -> TypeRef {
        T::type_ref()
    }
}

impl<T: MappedType> MappedType for Vec<T> {
    fn type_ref() -> TypeRef {
        TypeRef::new("Vec", TypeKind::List).with_args([T::type_ref()])
    }
}

impl<T: MappedType, S> MappedType for HashSet<T, S> {
    fn type_ref() -> TypeRef {
        TypeRef::new("HashSet", TypeKind::Set).with_args([T::type_ref()])
    }
}

impl<T: MappedType> MappedType for BTreeSet<T> {
    fn type_ref() -> TypeRef {
        TypeRef::new("BTreeSet", TypeKind::Set).with_args([T::type_ref()])
    }
}

impl<K: MappedType, V: MappedType, S> MappedType for HashMap<K, V, S> {
    fn type_ref() -> TypeRef {
        TypeRef::new("HashMap", TypeKind::Map).with_args([K::type_ref(), V::type_ref()])
    }
}

impl<K: MappedType, V: MappedType> MappedType for BTreeMap<K, V> {
    fn type_ref() -> TypeRef {
        TypeRef::new("BTreeMap", TypeKind::Map).with_args([K::type_ref(), V::type_ref()])
    }
}
