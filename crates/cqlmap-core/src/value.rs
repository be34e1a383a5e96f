// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dynamic values moved through codecs.
//!
//! A [`Value`] is either an in-memory property value (`Value::Enum`,
//! `Value::Bytes`, `Value::Object`) or a wire value (`Value::Text`,
//! `Value::Int`, `Value::Blob`). Codecs translate between the two sides.

use std::{collections::BTreeMap, fmt, net::IpAddr, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Number, Value as Json};
use uuid::Uuid;

use crate::{
    error::CodecError,
    meta::{NativeType, TypeKind, TypeRef}
};

/// Counter column value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Counter(pub i64);

impl Counter {
    /// Current count.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

/// Arbitrary-precision decimal as an unscaled integer and a scale.
///
/// `Decimal { unscaled: 1234, scale: 2 }` is `12.34`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decimal {
    /// Digits without the decimal point.
    pub unscaled: i128,
    /// Number of digits after the decimal point.
    pub scale:    i32
}

impl Decimal {
    /// Build a decimal.
    #[must_use]
    pub const fn new(unscaled: i128, scale: i32) -> Self {
        Self { unscaled, scale }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale <= 0 {
            write!(f, "{}", self.unscaled)?;
            for _ in 0..self.scale.unsigned_abs() {
                f.write_str("0")?;
            }
            return Ok(());
        }

        let digits = self.unscaled.unsigned_abs().to_string();
        let scale = self.scale.unsigned_abs() as usize;
        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        let sign = if self.unscaled < 0 { "-" } else { "" };
        write!(f, "{sign}{int_part}.{frac_part}")
    }
}

impl FromStr for Decimal {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CodecError::TypeMismatch {
            expected: "decimal".to_string(),
            found:    "text"
        };
        let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));
        let unscaled: i128 = format!("{int_part}{frac_part}")
            .parse()
            .map_err(|_| invalid())?;
        let scale = i32::try_from(frac_part.len()).map_err(|_| invalid())?;
        Ok(Self { unscaled, scale })
    }
}

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value.
    Null,
    /// `boolean`
    Boolean(bool),
    /// `tinyint`
    TinyInt(i8),
    /// `smallint`
    SmallInt(i16),
    /// `int`
    Int(i32),
    /// `bigint` and `counter`
    BigInt(i64),
    /// `float`
    Float(f32),
    /// `double`
    Double(f64),
    /// `decimal`
    Decimal(Decimal),
    /// `varint`
    Varint(i128),
    /// `text`
    Text(String),
    /// `uuid`
    Uuid(Uuid),
    /// `timestamp`
    Timestamp(DateTime<Utc>),
    /// `date`
    Date(NaiveDate),
    /// `time`
    Time(NaiveTime),
    /// `blob` on the wire.
    Blob(Vec<u8>),
    /// In-memory byte array.
    Bytes(Vec<u8>),
    /// `inet`
    Inet(IpAddr),
    /// In-memory enum constant, by name.
    Enum(String),
    /// `list`
    List(Vec<Value>),
    /// `set`
    Set(Vec<Value>),
    /// `map`, in entry order.
    Map(Vec<(Value, Value)>),
    /// In-memory object, by field name.
    Object(BTreeMap<String, Value>)
}

impl Value {
    /// Enum constant.
    #[must_use]
    pub fn enumeration(constant: impl Into<String>) -> Self {
        Self::Enum(constant.into())
    }

    /// Short name of the value's shape.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::TinyInt(_) => "tinyint",
            Self::SmallInt(_) => "smallint",
            Self::Int(_) => "int",
            Self::BigInt(_) => "bigint",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::Decimal(_) => "decimal",
            Self::Varint(_) => "varint",
            Self::Text(_) => "text",
            Self::Uuid(_) => "uuid",
            Self::Timestamp(_) => "timestamp",
            Self::Date(_) => "date",
            Self::Time(_) => "time",
            Self::Blob(_) => "blob",
            Self::Bytes(_) => "bytes",
            Self::Inet(_) => "inet",
            Self::Enum(_) => "enum",
            Self::List(_) => "list",
            Self::Set(_) => "set",
            Self::Map(_) => "map",
            Self::Object(_) => "object"
        }
    }

    /// Whether the value is [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether the value has the shape of a native column type.
    #[must_use]
    pub const fn matches_native(&self, native: NativeType) -> bool {
        matches!(
            (self, native),
            (Self::Boolean(_), NativeType::Boolean)
                | (Self::TinyInt(_), NativeType::TinyInt)
                | (Self::SmallInt(_), NativeType::SmallInt)
                | (Self::Int(_), NativeType::Int)
                | (Self::BigInt(_), NativeType::BigInt)
                | (Self::Float(_), NativeType::Float)
                | (Self::Double(_), NativeType::Double)
                | (Self::Decimal(_), NativeType::Decimal)
                | (Self::Varint(_), NativeType::Varint)
                | (Self::Text(_), NativeType::Text)
                | (Self::Uuid(_), NativeType::Uuid)
                | (Self::Timestamp(_), NativeType::Timestamp)
                | (Self::Date(_), NativeType::Date)
                | (Self::Time(_), NativeType::Time)
                | (Self::Blob(_), NativeType::Blob)
                | (Self::Inet(_), NativeType::Inet)
        )
    }

    /// Untyped JSON rendering.
    #[must_use]
    pub fn to_json(&self) -> Json {
        match self {
            Self::Null => Json::Null,
            Self::Boolean(v) => Json::Bool(*v),
            Self::TinyInt(v) => Json::from(*v),
            Self::SmallInt(v) => Json::from(*v),
            Self::Int(v) => Json::from(*v),
            Self::BigInt(v) => Json::from(*v),
            Self::Float(v) => Number::from_f64(f64::from(*v)).map_or(Json::Null, Json::Number),
            Self::Double(v) => Number::from_f64(*v).map_or(Json::Null, Json::Number),
            Self::Decimal(v) => Json::String(v.to_string()),
            Self::Varint(v) => i64::try_from(*v).map_or_else(|_| Json::String(v.to_string()), Json::from),
            Self::Text(v) | Self::Enum(v) => Json::String(v.clone()),
            Self::Uuid(v) => Json::String(v.to_string()),
            Self::Timestamp(v) => Json::String(v.to_rfc3339()),
            Self::Date(v) => Json::String(v.to_string()),
            Self::Time(v) => Json::String(v.to_string()),
            Self::Blob(v) | Self::Bytes(v) => Json::Array(v.iter().map(|b| Json::from(*b)).collect()),
            Self::Inet(v) => Json::String(v.to_string()),
            Self::List(items) | Self::Set(items) => Json::Array(items.iter().map(Self::to_json).collect()),
            Self::Map(entries) => map_to_json(entries),
            Self::Object(fields) => Json::Object(
                fields
                    .iter()
                    .map(|(name, value)| (name.clone(), value.to_json()))
                    .collect()
            )
        }
    }

    /// Convert JSON into a value shaped by `ty`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] when the JSON does not fit the type.
    pub fn from_json(json: &Json, ty: &TypeRef) -> Result<Self, CodecError> {
        if json.is_null() {
            return Ok(Self::Null);
        }
        let mismatch = || CodecError::TypeMismatch {
            expected: ty.to_string(),
            found:    json_kind(json)
        };

        match &ty.kind {
            TypeKind::Native(native) => native_from_json(json, *native).ok_or_else(mismatch),
            TypeKind::Counter => json.as_i64().map(Self::BigInt).ok_or_else(mismatch),
            TypeKind::Enum(constants) => {
                let name = json.as_str().ok_or_else(mismatch)?;
                if constants.iter().any(|c| c == name) {
                    Ok(Self::Enum(name.to_string()))
                } else {
                    Err(CodecError::UnknownConstant {
                        enum_type: ty.name.clone(),
                        constant:  name.to_string()
                    })
                }
            }
            TypeKind::ByteArray => {
                let items = json.as_array().ok_or_else(mismatch)?;
                items
                    .iter()
                    .map(|b| b.as_u64().and_then(|b| u8::try_from(b).ok()).ok_or_else(mismatch))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Self::Bytes)
            }
            TypeKind::List | TypeKind::Set => {
                let items = json.as_array().ok_or_else(mismatch)?;
                let items = items
                    .iter()
                    .map(|item| match ty.args.first() {
                        Some(element) => Self::from_json(item, element),
                        None => Ok(Self::from_json_untyped(item))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(if matches!(ty.kind, TypeKind::List) {
                    Self::List(items)
                } else {
                    Self::Set(items)
                })
            }
            TypeKind::Map => map_from_json(json, ty).ok_or_else(mismatch)?,
            TypeKind::Object(Some(meta)) => {
                let object = json.as_object().ok_or_else(mismatch)?;
                let mut fields = BTreeMap::new();
                for declared in meta.flatten_fields() {
                    let field = declared.field;
                    let value = match object.get(&field.name) {
                        Some(raw) => Self::from_json(raw, &field.ty)?,
                        None => Self::Null
                    };
                    fields.insert(field.name.clone(), value);
                }
                Ok(Self::Object(fields))
            }
            TypeKind::Object(None) => Ok(Self::from_json_untyped(json))
        }
    }

    /// Convert JSON without a target type.
    #[must_use]
    pub fn from_json_untyped(json: &Json) -> Self {
        match json {
            Json::Null => Self::Null,
            Json::Bool(v) => Self::Boolean(*v),
            Json::Number(n) => n
                .as_i64()
                .map(Self::BigInt)
                .or_else(|| n.as_f64().map(Self::Double))
                .unwrap_or(Self::Null),
            Json::String(s) => Self::Text(s.clone()),
            Json::Array(items) => Self::List(items.iter().map(Self::from_json_untyped).collect()),
            Json::Object(fields) => Self::Object(
                fields
                    .iter()
                    .map(|(name, value)| (name.clone(), Self::from_json_untyped(value)))
                    .collect()
            )
        }
    }
}

fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object"
    }
}

fn map_to_json(entries: &[(Value, Value)]) -> Json {
    let string_keys = entries
        .iter()
        .all(|(key, _)| matches!(key, Value::Text(_) | Value::Enum(_)));
    if string_keys {
        let object: JsonMap<String, Json> = entries
            .iter()
            .filter_map(|(key, value)| match key {
                Value::Text(k) | Value::Enum(k) => Some((k.clone(), value.to_json())),
                _ => None
            })
            .collect();
        Json::Object(object)
    } else {
        Json::Array(
            entries
                .iter()
                .map(|(key, value)| Json::Array(vec![key.to_json(), value.to_json()]))
                .collect()
        )
    }
}

fn map_from_json(json: &Json, ty: &TypeRef) -> Option<Result<Value, CodecError>> {
    let (key_ty, value_ty) = match ty.args.as_slice() {
        [key, value] => (Some(key), Some(value)),
        _ => (None, None)
    };
    let typed = |raw: &Json, target: Option<&TypeRef>| match target {
        Some(target) => Value::from_json(raw, target),
        None => Ok(Value::from_json_untyped(raw))
    };

    let entries: Result<Vec<_>, CodecError> = match json {
        Json::Object(object) => object
            .iter()
            .map(|(key, value)| {
                let key = typed(&Json::String(key.clone()), key_ty)
                    .or_else(|_| {
                        let parsed: Json = serde_json::from_str(key).map_err(|e| CodecError::Json {
                            target: ty.to_string(),
                            reason: e.to_string()
                        })?;
                        typed(&parsed, key_ty)
                    })?;
                Ok::<_, CodecError>((key, typed(value, value_ty)?))
            })
            .collect(),
        Json::Array(pairs) => pairs
            .iter()
            .map(|pair| match pair.as_array().map(Vec::as_slice) {
                Some([key, value]) => Ok((typed(key, key_ty)?, typed(value, value_ty)?)),
                _ => Err(CodecError::TypeMismatch {
                    expected: ty.to_string(),
                    found:    json_kind(pair)
                })
            })
            .collect(),
        _ => return None
    };
    Some(entries.map(Value::Map))
}

fn native_from_json(json: &Json, native: NativeType) -> Option<Value> {
    let value = match native {
        NativeType::Boolean => Value::Boolean(json.as_bool()?),
        NativeType::TinyInt => Value::TinyInt(i8::try_from(json.as_i64()?).ok()?),
        NativeType::SmallInt => Value::SmallInt(i16::try_from(json.as_i64()?).ok()?),
        NativeType::Int => Value::Int(i32::try_from(json.as_i64()?).ok()?),
        NativeType::BigInt => Value::BigInt(json.as_i64()?),
        #[allow(clippy::cast_possible_truncation)]
        NativeType::Float => Value::Float(json.as_f64()? as f32),
        NativeType::Double => Value::Double(json.as_f64()?),
        NativeType::Decimal => match json {
            Json::String(s) => Value::Decimal(s.parse().ok()?),
            Json::Number(n) => Value::Decimal(n.to_string().parse().ok()?),
            _ => return None
        },
        NativeType::Varint => match json {
            Json::String(s) => Value::Varint(s.parse().ok()?),
            Json::Number(n) => Value::Varint(i128::from(n.as_i64()?)),
            _ => return None
        },
        NativeType::Text => Value::Text(json.as_str()?.to_string()),
        NativeType::Uuid => Value::Uuid(json.as_str()?.parse().ok()?),
        NativeType::Timestamp => Value::Timestamp(
            DateTime::parse_from_rfc3339(json.as_str()?)
                .ok()?
                .with_timezone(&Utc)
        ),
        NativeType::Date => Value::Date(json.as_str()?.parse().ok()?),
        NativeType::Time => Value::Time(json.as_str()?.parse().ok()?),
        NativeType::Blob => Value::Blob(
            json.as_array()?
                .iter()
                .map(|b| b.as_u64().and_then(|b| u8::try_from(b).ok()))
                .collect::<Option<Vec<_>>>()?
        ),
        NativeType::Inet => Value::Inet(json.as_str()?.parse().ok()?)
    };
    Some(value)
}

macro_rules! from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

from_scalar! {
    bool => Boolean,
    i8 => TinyInt,
    i16 => SmallInt,
    i32 => Int,
    i64 => BigInt,
    i128 => Varint,
    f32 => Float,
    f64 => Double,
    Decimal => Decimal,
    String => Text,
    Uuid => Uuid,
    DateTime<Utc> => Timestamp,
    NaiveDate => Date,
    NaiveTime => Time,
    IpAddr => Inet
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Counter> for Value {
    fn from(value: Counter) -> Self {
        Self::BigInt(value.0)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
