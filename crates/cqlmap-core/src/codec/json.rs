// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! JSON transcoding.

use std::{fmt, sync::Arc};

use crate::{error::CodecError, meta::TypeRef, value::Value};

/// Serializes values to JSON text and back.
pub trait JsonMapper: Send + Sync {
    /// Render a value as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Json`] when the value cannot be serialized.
    fn to_json(&self, value: &Value) -> Result<String, CodecError>;

    /// Parse JSON text into a value shaped by `target`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] when the text is not JSON or does not fit the
    /// target type.
    fn from_json(&self, json: &str, target: &TypeRef) -> Result<Value, CodecError>;
}

/// Hands out a [`JsonMapper`] per target type.
pub trait JsonMapperFactory: Send + Sync {
    /// Mapper used for properties of type `target`.
    fn mapper_for(&self, target: &TypeRef) -> Arc<dyn JsonMapper>;
}

/// `serde_json` backed mapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeJsonMapper;

impl JsonMapper for SerdeJsonMapper {
    fn to_json(&self, value: &Value) -> Result<String, CodecError> {
        serde_json::to_string(&value.to_json()).map_err(|e| CodecError::Json {
            target: value.kind_name().to_string(),
            reason: e.to_string()
        })
    }

    fn from_json(&self, json: &str, target: &TypeRef) -> Result<Value, CodecError> {
        let parsed: serde_json::Value = serde_json::from_str(json).map_err(|e| CodecError::Json {
            target: target.to_string(),
            reason: e.to_string()
        })?;
        Value::from_json(&parsed, target)
    }
}

/// Factory returning [`SerdeJsonMapper`] for every type.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeJsonMapperFactory;

impl JsonMapperFactory for SerdeJsonMapperFactory {
    fn mapper_for(&self, _target: &TypeRef) -> Arc<dyn JsonMapper> {
        Arc::new(SerdeJsonMapper)
    }
}

/// Codec storing a value as JSON text, decoded against the declared type.
#[derive(Clone)]
pub struct JsonCodec {
    target: TypeRef,
    mapper: Arc<dyn JsonMapper>
}

impl JsonCodec {
    /// Codec for `target` using `mapper`.
    #[must_use]
    pub fn new(target: TypeRef, mapper: Arc<dyn JsonMapper>) -> Self {
        Self { target, mapper }
    }

    /// Declared type.
    #[must_use]
    pub fn target(&self) -> &TypeRef {
        &self.target
    }

    pub(crate) fn encode(&self, value: &Value) -> Result<Value, CodecError> {
        self.mapper.to_json(value).map(Value::Text)
    }

    pub(crate) fn decode(&self, value: &Value) -> Result<Value, CodecError> {
        match value {
            Value::Text(json) => self.mapper.from_json(json, &self.target),
            other => Err(CodecError::TypeMismatch {
                expected: "text".to_string(),
                found:    other.kind_name()
            })
        }
    }
}

impl fmt::Debug for JsonCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonCodec")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
