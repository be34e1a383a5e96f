// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Codec selection.
//!
//! Decision order for a declared type and its annotations:
//!
//! 1. `Codec(path)` → registered custom codec, validated against the type;
//!    its target must be a column type
//! 2. enum → `EnumName`, or `EnumOrdinal` with `Enumerated(Ordinal)`
//! 3. `Vec<u8>` → `ByteArray`
//! 4. `Json` → `Json` with the configured mapper
//! 5. native scalar or counter → `Native`
//! 6. list / set / map → element codecs derived by the same rules
//! 7. anything else → unsupported type

use std::sync::Arc;

use tracing::trace;

use super::{Codec, CustomCodecHandle, EnumCodec, JsonCodec, custom::IDENTITY_CODEC};
use crate::{
    config::MapperConfig,
    error::{CodecSide, InstantiationError, MappingError, Result},
    inference::{infer_element_type, infer_map_key_value_types},
    meta::{Annotation, AnnotationsExt, EnumEncoding, TypeKind, TypeRef}
};

/// Where a codec is being derived, for diagnostics and configuration.
#[derive(Debug, Clone, Copy)]
pub struct CodecContext<'a> {
    /// Canonical name of the declaring class.
    pub class:  &'a str,
    /// Field name.
    pub field:  &'a str,
    /// Mapper configuration.
    pub config: &'a MapperConfig
}

/// Derives codecs from declared types.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodecFactory;

impl CodecFactory {
    /// Codec for a declared type carrying `annotations`.
    ///
    /// # Errors
    ///
    /// Returns a mapping error when no codec fits the type, or an
    /// instantiation error when a custom codec cannot be built.
    pub fn derive(ctx: &CodecContext<'_>, ty: &TypeRef, annotations: &[Annotation]) -> Result<Codec> {
        if let Some(path) = annotations.codec() {
            return Self::derive_custom(ctx, ty, path);
        }

        if let Some(enum_codec) = EnumCodec::new(ty) {
            let codec = match annotations.enumerated().unwrap_or_default() {
                EnumEncoding::Name => Codec::EnumName(enum_codec),
                EnumEncoding::Ordinal => Codec::EnumOrdinal(enum_codec)
            };
            return Ok(codec);
        }
        if annotations.enumerated().is_some() {
            return Err(MappingError::InvalidEnumerated {
                class:     ctx.class.to_string(),
                field:     ctx.field.to_string(),
                type_name: ty.to_string()
            }
            .into());
        }

        if matches!(ty.kind, TypeKind::ByteArray) {
            return Ok(Codec::ByteArray);
        }

        if annotations.is_json() {
            let mapper = ctx.config.json_mappers().mapper_for(ty);
            return Ok(Codec::Json(JsonCodec::new(ty.clone(), mapper)));
        }

        match &ty.kind {
            TypeKind::Native(_) | TypeKind::Counter => Ok(Codec::Native(ty.clone())),
            TypeKind::List => Self::derive_list(ctx, ty),
            TypeKind::Set => Self::derive_set(ctx, ty),
            TypeKind::Map => Self::derive_map(ctx, ty),
            TypeKind::Enum(_) | TypeKind::ByteArray | TypeKind::Object(_) => {
                Err(MappingError::UnsupportedType {
                    class:     ctx.class.to_string(),
                    field:     ctx.field.to_string(),
                    type_name: ty.to_string()
                }
                .into())
            }
        }
    }

    /// List codec applying the element codec to every item.
    ///
    /// # Errors
    ///
    /// Fails like [`CodecFactory::derive`] for the element, or when the list
    /// is raw or nests another collection.
    pub fn derive_list(ctx: &CodecContext<'_>, ty: &TypeRef) -> Result<Codec> {
        let element = infer_element_type(ty, ctx.class, ctx.field)?;
        let codec = Self::derive(ctx, element, &element.annotations)?;
        Ok(Codec::List(Box::new(codec)))
    }

    /// Set codec applying the element codec to every item.
    ///
    /// # Errors
    ///
    /// Same as [`CodecFactory::derive_list`].
    pub fn derive_set(ctx: &CodecContext<'_>, ty: &TypeRef) -> Result<Codec> {
        let element = infer_element_type(ty, ctx.class, ctx.field)?;
        let codec = Self::derive(ctx, element, &element.annotations)?;
        Ok(Codec::Set(Box::new(codec)))
    }

    /// Map codec with independent key and value codecs.
    ///
    /// # Errors
    ///
    /// Same as [`CodecFactory::derive_list`], for both key and value.
    pub fn derive_map(ctx: &CodecContext<'_>, ty: &TypeRef) -> Result<Codec> {
        let (key, value) = infer_map_key_value_types(ty, ctx.class, ctx.field)?;
        let key_codec = Self::derive(ctx, key, &key.annotations)?;
        let value_codec = Self::derive(ctx, value, &value.annotations)?;
        Ok(Codec::Map {
            key:   Box::new(key_codec),
            value: Box::new(value_codec)
        })
    }

    fn derive_custom(ctx: &CodecContext<'_>, ty: &TypeRef, path: &str) -> Result<Codec> {
        if path.is_empty() || path == IDENTITY_CODEC {
            return Err(MappingError::CodecNotDeclared {
                class: ctx.class.to_string(),
                field: ctx.field.to_string()
            }
            .into());
        }

        let codec = match ctx.config.codecs().instantiate(path) {
            None => {
                return Err(MappingError::UnknownCodec {
                    class: ctx.class.to_string(),
                    field: ctx.field.to_string(),
                    codec: path.to_string()
                }
                .into());
            }
            Some(Err(reason)) => {
                return Err(InstantiationError::Codec {
                    class: ctx.class.to_string(),
                    field: ctx.field.to_string(),
                    codec: path.to_string(),
                    reason
                }
                .into());
            }
            Some(Ok(codec)) => codec
        };

        let missing = |side| MappingError::CodecMissingType {
            class: ctx.class.to_string(),
            field: ctx.field.to_string(),
            codec: path.to_string(),
            side
        };
        let source = codec.source_type().ok_or_else(|| missing(CodecSide::Source))?;
        let target = codec.target_type().ok_or_else(|| missing(CodecSide::Target))?;

        if &source != ty {
            return Err(MappingError::CodecTypeMismatch {
                class:    ctx.class.to_string(),
                field:    ctx.field.to_string(),
                codec:    path.to_string(),
                expected: ty.to_string(),
                found:    source.to_string()
            }
            .into());
        }

        if !is_column_type(&target) {
            return Err(MappingError::CodecTargetNotColumn {
                class:  ctx.class.to_string(),
                field:  ctx.field.to_string(),
                codec:  path.to_string(),
                target: target.to_string()
            }
            .into());
        }

        trace!(class = ctx.class, field = ctx.field, codec = path, "custom codec attached");
        Ok(Codec::Custom(CustomCodecHandle::new(path, source, target, Arc::from(codec))))
    }
}

/// Native scalars, counters and collections of column types.
fn is_column_type(ty: &TypeRef) -> bool {
    match ty.kind {
        TypeKind::Native(_) | TypeKind::Counter => true,
        TypeKind::List | TypeKind::Set | TypeKind::Map => {
            !ty.args.is_empty() && ty.args.iter().all(is_column_type)
        }
        TypeKind::Enum(_) | TypeKind::ByteArray | TypeKind::Object(_) => false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        codec::{CodecRegistry, CustomCodec},
        error::{CodecError, Error},
        meta::NativeType,
        value::Value
    };

    struct Fixed {
        source: Option<TypeRef>,
        target: Option<TypeRef>
    }

    impl CustomCodec for Fixed {
        fn source_type(&self) -> Option<TypeRef> {
            self.source.clone()
        }

        fn target_type(&self) -> Option<TypeRef> {
            self.target.clone()
        }

        fn encode(&self, value: &Value) -> std::result::Result<Value, CodecError> {
            match value {
                Value::BigInt(v) => Ok(Value::Text(v.to_string())),
                other => Ok(other.clone())
            }
        }

        fn decode(&self, value: &Value) -> std::result::Result<Value, CodecError> {
            match value {
                Value::Text(v) => v.parse().map(Value::BigInt).map_err(|_| CodecError::Custom {
                    codec:  "fixed".to_string(),
                    reason: "not a number".to_string()
                }),
                other => Ok(other.clone())
            }
        }
    }

    fn long() -> TypeRef {
        TypeRef::native(NativeType::BigInt)
    }

    fn text() -> TypeRef {
        TypeRef::native(NativeType::Text)
    }

    fn level() -> TypeRef {
        TypeRef::enumeration("app::Level", ["Low", "Mid", "High"])
    }

    fn config() -> MapperConfig {
        let mut codecs = CodecRegistry::new();
        codecs
            .register_with("long_as_text", || {
                Ok(Box::new(Fixed {
                    source: Some(long()),
                    target: Some(text())
                }) as Box<dyn CustomCodec>)
            })
            .register_with("no_source", || {
                Ok(Box::new(Fixed {
                    source: None,
                    target: Some(text())
                }) as Box<dyn CustomCodec>)
            })
            .register_with("no_target", || {
                Ok(Box::new(Fixed {
                    source: Some(long()),
                    target: None
                }) as Box<dyn CustomCodec>)
            })
            .register_with("long_as_level", || {
                Ok(Box::new(Fixed {
                    source: Some(long()),
                    target: Some(level())
                }) as Box<dyn CustomCodec>)
            })
            .register_with("long_as_levels", || {
                Ok(Box::new(Fixed {
                    source: Some(long()),
                    target: Some(TypeRef::list(level()))
                }) as Box<dyn CustomCodec>)
            })
            .register_with("long_as_texts", || {
                Ok(Box::new(Fixed {
                    source: Some(long()),
                    target: Some(TypeRef::list(text()))
                }) as Box<dyn CustomCodec>)
            })
            .register_with("failing", || Err("missing settings".to_string()));
        MapperConfig::builder().codecs(codecs).build()
    }

    fn derive(config: &MapperConfig, ty: &TypeRef, annotations: &[Annotation]) -> Result<Codec> {
        let ctx = CodecContext {
            class: "app::Entity",
            field: "value",
            config
        };
        CodecFactory::derive(&ctx, ty, annotations)
    }

    fn mapping_err(result: Result<Codec>) -> MappingError {
        match result {
            Err(Error::Mapping(err)) => err,
            other => panic!("expected mapping error, got {other:?}")
        }
    }

    #[test]
    fn native_passthrough() {
        let codec = derive(&config(), &long(), &[]).unwrap();
        assert!(matches!(codec, Codec::Native(_)));
        assert_eq!(codec.encode(&Value::BigInt(5)).unwrap(), Value::BigInt(5));
    }

    #[test]
    fn enum_defaults_to_name() {
        let codec = derive(&config(), &level(), &[]).unwrap();
        assert!(matches!(codec, Codec::EnumName(_)));
    }

    #[test]
    fn enum_ordinal_on_request() {
        let codec = derive(
            &config(),
            &level(),
            &[Annotation::Enumerated(EnumEncoding::Ordinal)]
        )
        .unwrap();
        assert_eq!(codec.encode(&Value::enumeration("High")).unwrap(), Value::Int(2));
    }

    #[test]
    fn enumerated_on_non_enum_fails() {
        let err = mapping_err(derive(
            &config(),
            &text(),
            &[Annotation::Enumerated(EnumEncoding::Ordinal)]
        ));
        assert!(matches!(err, MappingError::InvalidEnumerated { .. }));
    }

    #[test]
    fn byte_array_codec() {
        let codec = derive(&config(), &TypeRef::bytes(), &[]).unwrap();
        assert!(matches!(codec, Codec::ByteArray));
    }

    #[test]
    fn json_annotation_wins_over_collection() {
        let ty = TypeRef::list(text());
        let codec = derive(&config(), &ty, &[Annotation::Json]).unwrap();
        assert!(matches!(codec, Codec::Json(_)));
        assert_eq!(
            codec
                .encode(&Value::List(vec![Value::from("a")]))
                .unwrap(),
            Value::from(r#"["a"]"#)
        );
    }

    #[test]
    fn object_without_json_is_unsupported() {
        let err = mapping_err(derive(&config(), &TypeRef::object("app::Address"), &[]));
        assert_eq!(
            err,
            MappingError::UnsupportedType {
                class:     "app::Entity".to_string(),
                field:     "value".to_string(),
                type_name: "app::Address".to_string()
            }
        );
    }

    #[test]
    fn list_of_ordinal_enums() {
        let ty = TypeRef::list(level().annotated(Annotation::Enumerated(EnumEncoding::Ordinal)));
        let codec = derive(&config(), &ty, &[]).unwrap();
        let encoded = codec
            .encode(&Value::List(vec![Value::enumeration("Mid")]))
            .unwrap();
        assert_eq!(encoded, Value::List(vec![Value::Int(1)]));
    }

    #[test]
    fn map_with_json_values() {
        let ty = TypeRef::map(
            level().annotated(Annotation::Enumerated(EnumEncoding::Ordinal)),
            TypeRef::list(text()).annotated(Annotation::Json)
        );
        let codec = derive(&config(), &ty, &[]).unwrap();
        let Codec::Map { key, value } = &codec else {
            panic!("expected map codec, got {codec:?}");
        };
        assert!(matches!(**key, Codec::EnumOrdinal(_)));
        assert!(matches!(**value, Codec::Json(_)));
    }

    #[test]
    fn custom_codec_attached() {
        let codec = derive(
            &config(),
            &long(),
            &[Annotation::Codec {
                path: "long_as_text".to_string()
            }]
        )
        .unwrap();
        assert_eq!(codec.target_type(), text());
        assert_eq!(codec.encode(&Value::BigInt(12)).unwrap(), Value::from("12"));
        assert_eq!(codec.decode(&Value::from("12")).unwrap(), Value::BigInt(12));
    }

    #[test]
    fn custom_codec_validation() {
        let config = config();
        let codec = |path: &str| {
            [Annotation::Codec {
                path: path.to_string()
            }]
        };

        assert!(matches!(
            mapping_err(derive(&config, &long(), &codec(""))),
            MappingError::CodecNotDeclared { .. }
        ));
        assert!(matches!(
            mapping_err(derive(&config, &long(), &codec(IDENTITY_CODEC))),
            MappingError::CodecNotDeclared { .. }
        ));
        assert!(matches!(
            mapping_err(derive(&config, &long(), &codec("nowhere"))),
            MappingError::UnknownCodec { .. }
        ));
        assert!(matches!(
            mapping_err(derive(&config, &long(), &codec("no_source"))),
            MappingError::CodecMissingType {
                side: CodecSide::Source,
                ..
            }
        ));
        assert!(matches!(
            mapping_err(derive(&config, &long(), &codec("no_target"))),
            MappingError::CodecMissingType {
                side: CodecSide::Target,
                ..
            }
        ));
        assert_eq!(
            mapping_err(derive(&config, &text(), &codec("long_as_text"))),
            MappingError::CodecTypeMismatch {
                class:    "app::Entity".to_string(),
                field:    "value".to_string(),
                codec:    "long_as_text".to_string(),
                expected: "String".to_string(),
                found:    "i64".to_string()
            }
        );
        assert!(matches!(
            derive(&config, &long(), &codec("failing")),
            Err(Error::Instantiation(InstantiationError::Codec { .. }))
        ));
    }

    #[test]
    fn custom_codec_target_must_be_column_type() {
        let config = config();
        let codec = |path: &str| {
            [Annotation::Codec {
                path: path.to_string()
            }]
        };

        assert_eq!(
            mapping_err(derive(&config, &long(), &codec("long_as_level"))),
            MappingError::CodecTargetNotColumn {
                class:  "app::Entity".to_string(),
                field:  "value".to_string(),
                codec:  "long_as_level".to_string(),
                target: "app::Level".to_string()
            }
        );
        assert!(matches!(
            mapping_err(derive(&config, &long(), &codec("long_as_levels"))),
            MappingError::CodecTargetNotColumn { target, .. } if target == "Vec<app::Level>"
        ));

        let codec = derive(&config, &long(), &codec("long_as_texts")).unwrap();
        assert_eq!(codec.target_type(), TypeRef::list(text()));
    }
}
