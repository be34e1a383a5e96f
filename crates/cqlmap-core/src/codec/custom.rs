// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! User-supplied codecs.
//!
//! A property opts into a custom codec with `#[codec(path = "...")]`. The
//! path is looked up in the [`CodecRegistry`] carried by the mapper
//! configuration, and the registered constructor builds the codec once per
//! property.
//!
//! ```rust
//! use cqlmap_core::{
//!     codec::{CodecRegistry, CustomCodec},
//!     error::CodecError,
//!     meta::{MappedType, TypeRef},
//!     value::Value
//! };
//!
//! #[derive(Default)]
//! struct CentsCodec;
//!
//! impl CustomCodec for CentsCodec {
//!     fn source_type(&self) -> Option<TypeRef> {
//!         Some(i64::type_ref())
//!     }
//!
//!     fn target_type(&self) -> Option<TypeRef> {
//!         Some(String::type_ref())
//!     }
//!
//!     fn encode(&self, value: &Value) -> Result<Value, CodecError> {
//!         match value {
//!             Value::BigInt(cents) => Ok(Value::Text(format!("{}.{:02}", cents / 100, cents % 100))),
//!             other => Err(CodecError::Custom {
//!                 codec:  "cents".into(),
//!                 reason: format!("unexpected {}", other.kind_name())
//!             })
//!         }
//!     }
//!
//!     fn decode(&self, value: &Value) -> Result<Value, CodecError> {
//!         let Value::Text(text) = value else {
//!             return Err(CodecError::Custom {
//!                 codec:  "cents".into(),
//!                 reason: "expected text".into()
//!             });
//!         };
//!         let cents = text.replace('.', "").parse().map_err(|_| CodecError::Custom {
//!             codec:  "cents".into(),
//!             reason: format!("'{text}' is not an amount")
//!         })?;
//!         Ok(Value::BigInt(cents))
//!     }
//! }
//!
//! let mut registry = CodecRegistry::new();
//! registry.register::<CentsCodec>("cents");
//! assert!(registry.contains("cents"));
//! ```

use std::{collections::HashMap, fmt, sync::Arc};

use crate::{error::CodecError, meta::TypeRef, value::Value};

/// Registry key standing for "no codec".
pub const IDENTITY_CODEC: &str = "identity";

/// A user-supplied codec.
pub trait CustomCodec: Send + Sync {
    /// In-memory type; must equal the declared field type.
    fn source_type(&self) -> Option<TypeRef>;

    /// Wire type.
    fn target_type(&self) -> Option<TypeRef>;

    /// Translate an in-memory value to its wire form.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] when the value cannot be encoded.
    fn encode(&self, value: &Value) -> Result<Value, CodecError>;

    /// Translate a wire value back to its in-memory form.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] when the value cannot be decoded.
    fn decode(&self, value: &Value) -> Result<Value, CodecError>;
}

type Constructor = dyn Fn() -> Result<Box<dyn CustomCodec>, String> + Send + Sync;

/// Codec constructors keyed by path.
#[derive(Clone, Default)]
pub struct CodecRegistry {
    constructors: HashMap<String, Arc<Constructor>>
}

impl CodecRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a codec built through its [`Default`] implementation.
    pub fn register<C>(&mut self, path: impl Into<String>) -> &mut Self
    where
        C: CustomCodec + Default + 'static
    {
        self.register_with(path, || Ok(Box::new(C::default()) as Box<dyn CustomCodec>))
    }

    /// Register a fallible constructor.
    pub fn register_with<F>(&mut self, path: impl Into<String>, constructor: F) -> &mut Self
    where
        F: Fn() -> Result<Box<dyn CustomCodec>, String> + Send + Sync + 'static
    {
        self.constructors.insert(path.into(), Arc::new(constructor));
        self
    }

    /// Whether a codec is registered under `path`.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.constructors.contains_key(path)
    }

    /// Build the codec registered under `path`.
    ///
    /// Returns `None` for unknown paths and the constructor's message when
    /// it fails.
    pub(crate) fn instantiate(&self, path: &str) -> Option<Result<Box<dyn CustomCodec>, String>> {
        self.constructors.get(path).map(|constructor| constructor())
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut paths: Vec<_> = self.constructors.keys().collect();
        paths.sort();
        f.debug_struct("CodecRegistry")
            .field("paths", &paths)
            .finish()
    }
}

/// A validated custom codec attached to a property.
#[derive(Clone)]
pub struct CustomCodecHandle {
    path:   String,
    source: TypeRef,
    target: TypeRef,
    codec:  Arc<dyn CustomCodec>
}

impl CustomCodecHandle {
    pub(crate) fn new(
        path: impl Into<String>,
        source: TypeRef,
        target: TypeRef,
        codec: Arc<dyn CustomCodec>
    ) -> Self {
        Self {
            path: path.into(),
            source,
            target,
            codec
        }
    }

    /// Registry path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// In-memory type.
    #[must_use]
    pub fn source_type(&self) -> &TypeRef {
        &self.source
    }

    /// Wire type.
    #[must_use]
    pub fn target_type(&self) -> &TypeRef {
        &self.target
    }

    pub(crate) fn encode(&self, value: &Value) -> Result<Value, CodecError> {
        self.codec.encode(value)
    }

    pub(crate) fn decode(&self, value: &Value) -> Result<Value, CodecError> {
        self.codec.decode(value)
    }
}

impl fmt::Debug for CustomCodecHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomCodecHandle")
            .field("path", &self.path)
            .field("source", &self.source)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::NativeType;

    #[derive(Default)]
    struct Upper;

    impl CustomCodec for Upper {
        fn source_type(&self) -> Option<TypeRef> {
            Some(TypeRef::native(NativeType::Text))
        }

        fn target_type(&self) -> Option<TypeRef> {
            Some(TypeRef::native(NativeType::Text))
        }

        fn encode(&self, value: &Value) -> Result<Value, CodecError> {
            match value {
                Value::Text(s) => Ok(Value::Text(s.to_uppercase())),
                other => Ok(other.clone())
            }
        }

        fn decode(&self, value: &Value) -> Result<Value, CodecError> {
            match value {
                Value::Text(s) => Ok(Value::Text(s.to_lowercase())),
                other => Ok(other.clone())
            }
        }
    }

    #[test]
    fn registry_instantiates_registered_codecs() {
        let mut registry = CodecRegistry::new();
        registry
            .register::<Upper>("upper")
            .register_with("broken", || Err("no config".to_string()));

        assert!(registry.contains("upper"));
        assert!(registry.instantiate("missing").is_none());
        assert_eq!(
            registry.instantiate("broken").map(|r| r.err()),
            Some(Some("no config".to_string()))
        );

        let codec = registry
            .instantiate("upper")
            .and_then(Result::ok)
            .expect("registered codec");
        assert_eq!(codec.encode(&Value::from("abc")).unwrap(), Value::from("ABC"));
    }

    #[test]
    fn debug_lists_paths() {
        let mut registry = CodecRegistry::new();
        registry.register::<Upper>("b").register::<Upper>("a");
        assert_eq!(format!("{registry:?}"), r#"CodecRegistry { paths: ["a", "b"] }"#);
    }
}
