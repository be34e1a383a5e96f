// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity parser.
//!
//! Fields are flattened across the inheritance chain (ancestors first) and
//! sorted into one of four buckets:
//!
//! | Bucket | Annotation | Result |
//! |--------|------------|--------|
//! | id | `Id` | [`IdDescriptor::Simple`] |
//! | embedded id | `EmbeddedId` | [`IdDescriptor::Compound`] from the key class |
//! | inline key | `PartitionKey`, `ClusteringColumn`, `Order` | [`IdDescriptor::Compound`] from the entity |
//! | regular | anything else | [`PropertyDescriptor`] |
//!
//! Fields without annotations are not mapped.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::{
    compound::CompoundKeyParser,
    context::{EntityContext, PropertyRole},
    ordering::reject_static,
    property::PropertyParser
};
use crate::{
    config::MapperConfig,
    descriptor::{EntityDescriptor, IdDescriptor, PropertyDescriptor},
    error::{InstantiationError, MappingError, Result},
    meta::{AnnotationsExt, ClassMeta, DeclaredField, TypeKind}
};

/// Builds [`EntityDescriptor`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityParser;

#[derive(Default)]
struct Buckets<'a> {
    ids:        Vec<DeclaredField<'a>>,
    embedded:   Vec<DeclaredField<'a>>,
    key_fields: Vec<DeclaredField<'a>>,
    regular:    Vec<DeclaredField<'a>>
}

impl<'a> Buckets<'a> {
    fn sort(class: &'a ClassMeta) -> Self {
        let mut buckets = Self::default();
        for field in class.flatten_fields() {
            let annotations = &field.field.annotations;
            if annotations.is_empty() {
                trace!(class = %class.canonical_name, field = %field.field.name, "unmapped field skipped");
                continue;
            }
            let bucket = if annotations.has_embedded_id() {
                &mut buckets.embedded
            } else if annotations.has_id() {
                &mut buckets.ids
            } else if annotations.has_key_marker() {
                &mut buckets.key_fields
            } else {
                &mut buckets.regular
            };
            bucket.push(field);
        }
        buckets
    }

    fn id_structures(&self) -> usize {
        self.ids.len() + self.embedded.len() + usize::from(!self.key_fields.is_empty())
    }

    fn id_field_names(&self) -> String {
        self.ids
            .iter()
            .chain(&self.embedded)
            .chain(&self.key_fields)
            .map(|f| f.field.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl EntityParser {
    /// Parse an entity class.
    ///
    /// # Errors
    ///
    /// Returns the first violated mapping rule, or an instantiation error
    /// when the embedded key class or a custom codec cannot be built.
    pub fn parse(class: &ClassMeta, config: &MapperConfig) -> Result<EntityDescriptor> {
        let ctx = EntityContext::new(class, config)?;
        let buckets = Buckets::sort(class);

        match buckets.id_structures() {
            0 => {
                return Err(MappingError::MissingId {
                    class: class.canonical_name.clone()
                }
                .into());
            }
            1 => {}
            _ => {
                return Err(MappingError::MultipleIds {
                    class: class.canonical_name.clone(),
                    found: buckets.id_field_names()
                }
                .into());
            }
        }

        let id = Self::parse_id(&ctx, &buckets)?;
        let properties = buckets
            .regular
            .iter()
            .map(|field| PropertyParser::parse(&ctx.property(class, *field, PropertyRole::Regular)))
            .collect::<Result<Vec<_>>>()?;

        check_unique_columns(class, &id, &properties)?;
        check_static_columns(class, &id, &properties)?;
        check_counter_mix(class, &properties)?;

        let descriptor = EntityDescriptor {
            class_name: class.canonical_name.clone(),
            keyspace: ctx.keyspace().to_string(),
            table: ctx.table().to_string(),
            id,
            properties,
            read_consistency: ctx.read_consistency(),
            write_consistency: ctx.write_consistency(),
            insert_strategy: ctx.insert_strategy(),
            schema_update: ctx.schema_update(),
            description: class.doc.clone()
        };

        debug!(
            class = %descriptor.class_name,
            table = %descriptor.qualified_table_name(),
            compound = descriptor.id.is_compound(),
            properties = descriptor.properties.len(),
            "entity parsed"
        );
        Ok(descriptor)
    }

    fn parse_id(ctx: &EntityContext<'_>, buckets: &Buckets<'_>) -> Result<IdDescriptor> {
        let class = ctx.class();

        if let Some(field) = buckets.ids.first() {
            reject_static(field.declaring_class, field)?;
            let property = PropertyParser::parse(&ctx.property(class, *field, PropertyRole::Id))?;
            return Ok(IdDescriptor::Simple(property));
        }

        if let Some(field) = buckets.embedded.first() {
            reject_static(field.declaring_class, field)?;
            let TypeKind::Object(Some(key_class)) = &field.field.ty.kind else {
                return Err(MappingError::InvalidEmbeddedId {
                    class:     field.declaring_class.canonical_name.clone(),
                    field:     field.field.name.clone(),
                    type_name: field.field.ty.to_string()
                }
                .into());
            };
            if !key_class.instantiable {
                return Err(InstantiationError::MissingConstructor {
                    class: key_class.canonical_name.clone()
                }
                .into());
            }
            let embedded = PropertyParser::parse(&ctx.property(class, *field, PropertyRole::EmbeddedId))?;
            let key = CompoundKeyParser::parse(ctx, key_class)?;
            return Ok(IdDescriptor::Compound {
                embedded: Some(embedded),
                key
            });
        }

        let mut key = CompoundKeyParser::parse_inline(ctx)?;
        if key.len() == 1
            && key.clustering.is_empty()
            && let Some(property) = key.partition.components.pop()
        {
            return Ok(IdDescriptor::Simple(property));
        }
        Ok(IdDescriptor::Compound {
            embedded: None,
            key
        })
    }
}

fn check_unique_columns(
    class: &ClassMeta,
    id: &IdDescriptor,
    properties: &[PropertyDescriptor]
) -> Result<(), MappingError> {
    let mut seen = HashSet::new();
    for property in id.columns().into_iter().chain(properties) {
        if !seen.insert(property.column()) {
            return Err(MappingError::DuplicateColumn {
                class:  class.canonical_name.clone(),
                column: property.column().to_string()
            });
        }
    }
    Ok(())
}

fn check_static_columns(
    class: &ClassMeta,
    id: &IdDescriptor,
    properties: &[PropertyDescriptor]
) -> Result<(), MappingError> {
    let has_clustering = id
        .compound_key()
        .is_some_and(|key| !key.clustering().is_empty());
    match properties.iter().find(|p| p.is_static()) {
        Some(property) if !has_clustering => Err(MappingError::StaticWithoutClustering {
            class: class.canonical_name.clone(),
            field: property.name().to_string()
        }),
        _ => Ok(())
    }
}

fn check_counter_mix(class: &ClassMeta, properties: &[PropertyDescriptor]) -> Result<(), MappingError> {
    let counter = properties.iter().find(|p| p.is_counter());
    let regular = properties.iter().find(|p| !p.is_counter());
    match (counter, regular) {
        (Some(counter), Some(regular)) => Err(MappingError::CounterMix {
            class:   class.canonical_name.clone(),
            counter: counter.name().to_string(),
            regular: regular.name().to_string()
        }),
        _ => Ok(())
    }
}
