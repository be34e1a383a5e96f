// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Property parser.
//!
//! Turns one field into a [`PropertyDescriptor`]:
//!
//! 1. classify the field ([`PropertyType`])
//! 2. resolve getter and setter
//! 3. resolve the column name
//! 4. resolve read/write consistency
//! 5. derive the codec
//! 6. record static, index and time-uuid flags

mod accessors;

use tracing::debug;

use super::context::{PropertyContext, PropertyRole};
use crate::{
    codec::{Codec, CodecContext, CodecFactory},
    config::ConsistencyLevel,
    descriptor::{PropertyDescriptor, PropertyType},
    error::{MappingError, Result},
    meta::{Annotation, AnnotationsExt, NativeType, TypeKind, TypeRef},
    naming::resolve_column_name
};

/// Parses a single field.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyParser;

impl PropertyParser {
    /// Parse the field described by `ctx`.
    ///
    /// # Errors
    ///
    /// Returns a mapping error naming the field and its declaring class
    /// when the field breaks a mapping rule, or an instantiation error when
    /// its custom codec cannot be built.
    pub fn parse(ctx: &PropertyContext<'_>) -> Result<PropertyDescriptor> {
        let field = ctx.field.field;
        let class = ctx.class_name();
        let annotations: Vec<Annotation> = field
            .annotations
            .iter()
            .chain(field.ty.annotations.iter())
            .cloned()
            .collect();

        let property_type = classify(ctx, &annotations)?;

        if annotations.is_time_uuid() && field.ty.native_type() != Some(NativeType::Uuid) {
            return Err(MappingError::InvalidTimeUuid {
                class:     class.to_string(),
                field:     field.name.clone(),
                type_name: field.ty.to_string()
            }
            .into());
        }

        let accessors = accessors::resolve(ctx.owner, field, class)?;

        let naming = field.annotations.naming().unwrap_or_else(|| ctx.naming());
        let column = resolve_column_name(field.annotations.column_name(), &field.name, naming);

        let (read, write) = field.annotations.consistency().unwrap_or_default();
        let read_consistency = read.unwrap_or(ctx.entity.read_consistency());
        let write_consistency = write.unwrap_or(ctx.entity.write_consistency());
        if property_type == PropertyType::Counter
            && (read_consistency == ConsistencyLevel::Any
                || write_consistency == ConsistencyLevel::Any)
        {
            return Err(MappingError::CounterAnyConsistency {
                class: class.to_string(),
                field: field.name.clone()
            }
            .into());
        }

        let codec = if property_type == PropertyType::EmbeddedId {
            Codec::Native(field.ty.clone())
        } else {
            let codec_ctx = CodecContext {
                class,
                field: &field.name,
                config: ctx.entity.config()
            };
            CodecFactory::derive(&codec_ctx, &field.ty, &annotations)?
        };

        let (key_type, value_type) = element_types(property_type, &field.ty);

        debug!(
            class,
            field = %field.name,
            column = %column,
            property_type = %property_type,
            "property parsed"
        );

        Ok(PropertyDescriptor {
            name: field.name.clone(),
            column,
            property_type,
            declared_type: field.ty.clone(),
            value_type,
            key_type,
            accessors,
            codec,
            read_consistency,
            write_consistency,
            static_column: annotations.is_static(),
            index: annotations.index(),
            time_uuid: annotations.is_time_uuid(),
            declaring_class: class.to_string(),
            description: field.doc.clone()
        })
    }
}

fn classify(ctx: &PropertyContext<'_>, annotations: &[Annotation]) -> Result<PropertyType> {
    let field = ctx.field.field;
    match ctx.role {
        PropertyRole::Id | PropertyRole::Component(_) => return Ok(PropertyType::Id),
        PropertyRole::EmbeddedId => return Ok(PropertyType::EmbeddedId),
        PropertyRole::Regular => {}
    }

    let counter_type = matches!(field.ty.kind, TypeKind::Counter);
    if counter_type || annotations.is_counter() {
        let valid = counter_type || field.ty.native_type() == Some(NativeType::BigInt);
        if !valid {
            return Err(MappingError::InvalidCounter {
                class:     ctx.class_name().to_string(),
                field:     field.name.clone(),
                type_name: field.ty.to_string()
            }
            .into());
        }
        return Ok(PropertyType::Counter);
    }

    if annotations.is_json() || annotations.codec().is_some() {
        return Ok(PropertyType::Simple);
    }

    Ok(match field.ty.kind {
        TypeKind::List => PropertyType::List,
        TypeKind::Set => PropertyType::Set,
        TypeKind::Map => PropertyType::Map,
        _ => PropertyType::Simple
    })
}

fn element_types(property_type: PropertyType, ty: &TypeRef) -> (Option<TypeRef>, TypeRef) {
    match (property_type, ty.args.as_slice()) {
        (PropertyType::List | PropertyType::Set, [element]) => (None, element.clone()),
        (PropertyType::Map, [key, value]) => (Some(key.clone()), value.clone()),
        _ => (None, ty.clone())
    }
}
