// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Bidirectional value codecs.
//!
//! A [`Codec`] translates a property value between its in-memory form
//! (source) and its wire form (target). The set of codecs is closed and
//! selected once per property by [`CodecFactory`]:
//!
//! | Variant | Source | Target |
//! |---------|--------|--------|
//! | `Native` | scalar | same scalar |
//! | `EnumName` | `Value::Enum` | `Value::Text` |
//! | `EnumOrdinal` | `Value::Enum` | `Value::Int` |
//! | `ByteArray` | `Value::Bytes` | `Value::Blob` |
//! | `Json` | any | `Value::Text` |
//! | `List` / `Set` / `Map` | collection | collection, per element |
//! | `Custom` | codec-defined | codec-defined |
//!
//! Every codec lets [`Value::Null`] through unchanged.

mod custom;
mod factory;
mod json;

use std::sync::Arc;

pub use custom::{CodecRegistry, CustomCodec, CustomCodecHandle, IDENTITY_CODEC};
pub use factory::{CodecContext, CodecFactory};
pub use json::{JsonCodec, JsonMapper, JsonMapperFactory, SerdeJsonMapper, SerdeJsonMapperFactory};

use crate::{
    error::CodecError,
    meta::{NativeType, TypeKind, TypeRef},
    value::Value
};

/// Enum constants shared by the name and ordinal codecs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCodec {
    ty:        TypeRef,
    constants: Arc<[String]>
}

impl EnumCodec {
    /// Codec for an enum type; `None` when the type is not an enum.
    #[must_use]
    pub fn new(ty: &TypeRef) -> Option<Self> {
        let constants = ty.enum_constants()?;
        Some(Self {
            ty:        ty.clone(),
            constants: constants.into()
        })
    }

    /// Enum type.
    #[must_use]
    pub fn enum_type(&self) -> &TypeRef {
        &self.ty
    }

    /// Declaration position of a constant.
    #[must_use]
    pub fn ordinal(&self, constant: &str) -> Option<usize> {
        self.constants.iter().position(|c| c == constant)
    }

    fn constant_of(&self, value: &Value) -> Result<usize, CodecError> {
        let Value::Enum(name) = value else {
            return Err(self.mismatch(value));
        };
        self.ordinal(name).ok_or_else(|| CodecError::UnknownConstant {
            enum_type: self.ty.name.clone(),
            constant:  name.clone()
        })
    }

    fn mismatch(&self, value: &Value) -> CodecError {
        CodecError::TypeMismatch {
            expected: self.ty.name.clone(),
            found:    value.kind_name()
        }
    }
}

/// A property codec.
#[derive(Debug, Clone)]
pub enum Codec {
    /// Identity on a native scalar or counter.
    Native(TypeRef),

    /// Enum constant to its name.
    EnumName(EnumCodec),

    /// Enum constant to its declaration position.
    EnumOrdinal(EnumCodec),

    /// Byte array to blob.
    ByteArray,

    /// Any value to JSON text.
    Json(JsonCodec),

    /// Element codec applied to every list item, in order.
    List(Box<Codec>),

    /// Element codec applied to every set item; duplicates collapse.
    Set(Box<Codec>),

    /// Key and value codecs applied to every entry.
    Map {
        /// Key codec.
        key:   Box<Codec>,
        /// Value codec.
        value: Box<Codec>
    },

    /// User-supplied codec.
    Custom(CustomCodecHandle)
}

impl Codec {
    /// In-memory type.
    #[must_use]
    pub fn source_type(&self) -> TypeRef {
        match self {
            Self::Native(ty) => ty.clone(),
            Self::EnumName(e) | Self::EnumOrdinal(e) => e.ty.clone(),
            Self::ByteArray => TypeRef::bytes(),
            Self::Json(json) => json.target().clone(),
            Self::List(element) => TypeRef::list(element.source_type()),
            Self::Set(element) => TypeRef::set(element.source_type()),
            Self::Map { key, value } => TypeRef::map(key.source_type(), value.source_type()),
            Self::Custom(handle) => handle.source_type().clone()
        }
    }

    /// Wire type.
    #[must_use]
    pub fn target_type(&self) -> TypeRef {
        match self {
            Self::Native(ty) => ty.clone(),
            Self::EnumName(_) | Self::Json(_) => TypeRef::native(NativeType::Text),
            Self::EnumOrdinal(_) => TypeRef::native(NativeType::Int),
            Self::ByteArray => TypeRef::native(NativeType::Blob),
            Self::List(element) => TypeRef::list(element.target_type()),
            Self::Set(element) => TypeRef::set(element.target_type()),
            Self::Map { key, value } => TypeRef::map(key.target_type(), value.target_type()),
            Self::Custom(handle) => handle.target_type().clone()
        }
    }

    /// Translate an in-memory value to its wire form.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] when the value does not fit the codec.
    pub fn encode(&self, value: &Value) -> Result<Value, CodecError> {
        if value.is_null() {
            return Ok(Value::Null);
        }
        match self {
            Self::Native(ty) => check_native(ty, value).map(|()| value.clone()),
            Self::EnumName(e) => {
                let ordinal = e.constant_of(value)?;
                Ok(Value::Text(e.constants[ordinal].clone()))
            }
            Self::EnumOrdinal(e) => {
                let ordinal = e.constant_of(value)?;
                ordinal_to_int(&e.ty.name, ordinal).map(Value::Int)
            }
            Self::ByteArray => match value {
                Value::Bytes(bytes) => Ok(Value::Blob(bytes.clone())),
                other => Err(mismatch("Vec<u8>", other))
            },
            Self::Json(json) => json.encode(value),
            Self::List(element) => {
                let items = items_of(value, "list")?;
                items
                    .iter()
                    .map(|item| element.encode(item))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::List)
            }
            Self::Set(element) => {
                let items = items_of(value, "set")?;
                let encoded = items
                    .iter()
                    .map(|item| element.encode(item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::Set(dedup(encoded)))
            }
            Self::Map { key, value: val } => {
                let Value::Map(entries) = value else {
                    return Err(mismatch("map", value));
                };
                entries
                    .iter()
                    .map(|(k, v)| Ok::<_, CodecError>((key.encode(k)?, val.encode(v)?)))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::Map)
            }
            Self::Custom(handle) => handle.encode(value)
        }
    }

    /// Translate a wire value back to its in-memory form.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] when the value does not fit the codec.
    pub fn decode(&self, value: &Value) -> Result<Value, CodecError> {
        if value.is_null() {
            return Ok(Value::Null);
        }
        match self {
            Self::Native(ty) => check_native(ty, value).map(|()| value.clone()),
            Self::EnumName(e) => {
                let Value::Text(name) = value else {
                    return Err(mismatch("text", value));
                };
                e.ordinal(name)
                    .map(|_| Value::Enum(name.clone()))
                    .ok_or_else(|| CodecError::UnknownConstant {
                        enum_type: e.ty.name.clone(),
                        constant:  name.clone()
                    })
            }
            Self::EnumOrdinal(e) => {
                let ordinal = match value {
                    Value::TinyInt(v) => i64::from(*v),
                    Value::SmallInt(v) => i64::from(*v),
                    Value::Int(v) => i64::from(*v),
                    Value::BigInt(v) => *v,
                    other => return Err(mismatch("int", other))
                };
                usize::try_from(ordinal)
                    .ok()
                    .and_then(|index| e.constants.get(index))
                    .map(|name| Value::Enum(name.clone()))
                    .ok_or_else(|| CodecError::OrdinalOutOfRange {
                        enum_type: e.ty.name.clone(),
                        ordinal
                    })
            }
            Self::ByteArray => match value {
                Value::Blob(bytes) => Ok(Value::Bytes(bytes.clone())),
                other => Err(mismatch("blob", other))
            },
            Self::Json(json) => json.decode(value),
            Self::List(element) => {
                let items = items_of(value, "list")?;
                items
                    .iter()
                    .map(|item| element.decode(item))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::List)
            }
            Self::Set(element) => {
                let items = items_of(value, "set")?;
                let decoded = items
                    .iter()
                    .map(|item| element.decode(item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::Set(dedup(decoded)))
            }
            Self::Map { key, value: val } => {
                let Value::Map(entries) = value else {
                    return Err(mismatch("map", value));
                };
                entries
                    .iter()
                    .map(|(k, v)| Ok::<_, CodecError>((key.decode(k)?, val.decode(v)?)))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::Map)
            }
            Self::Custom(handle) => handle.decode(value)
        }
    }
}

fn mismatch(expected: &str, found: &Value) -> CodecError {
    CodecError::TypeMismatch {
        expected: expected.to_string(),
        found:    found.kind_name()
    }
}

fn check_native(ty: &TypeRef, value: &Value) -> Result<(), CodecError> {
    let fits = match &ty.kind {
        TypeKind::Native(native) => value.matches_native(*native),
        TypeKind::Counter => matches!(value, Value::BigInt(_)),
        _ => true
    };
    if fits { Ok(()) } else { Err(mismatch(&ty.name, value)) }
}

fn items_of<'a>(value: &'a Value, expected: &str) -> Result<&'a [Value], CodecError> {
    match value {
        Value::List(items) | Value::Set(items) => Ok(items),
        other => Err(mismatch(expected, other))
    }
}

fn dedup(values: Vec<Value>) -> Vec<Value> {
    let mut unique: Vec<Value> = Vec::with_capacity(values.len());
    for value in values {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}

/// Narrow an ordinal to the `int` column it is stored in.
fn ordinal_to_int(enum_type: &str, ordinal: usize) -> Result<i32, CodecError> {
    i32::try_from(ordinal).map_err(|_| CodecError::OrdinalOutOfRange {
        enum_type: enum_type.to_string(),
        ordinal:   i64::try_from(ordinal).unwrap_or(i64::MAX)
    })
}
