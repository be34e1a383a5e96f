// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Compound key parser.

use tracing::debug;

use super::{
    context::{EntityContext, PropertyRole},
    ordering::{OrderedComponent, OrderingDialect},
    property::PropertyParser
};
use crate::{
    descriptor::{ClusteringComponent, ClusteringComponents, CompoundKey, PartitionComponents, PropertyDescriptor},
    error::{KeyPart, MappingError, Result},
    meta::{AnnotationsExt, ClassMeta, TypeKind}
};

/// Builds [`CompoundKey`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompoundKeyParser;

impl CompoundKeyParser {
    /// Parse an embedded key class.
    ///
    /// # Errors
    ///
    /// Returns a mapping error when the ordering annotations are invalid,
    /// when a component is a collection or counter, or when the key has
    /// fewer than two components.
    pub fn parse(ctx: &EntityContext<'_>, key_class: &ClassMeta) -> Result<CompoundKey> {
        let mut key = Self::parse_components(ctx, key_class)?;
        if key.len() < 2 {
            return Err(MappingError::TooFewComponents {
                class: key_class.canonical_name.clone(),
                found: key.len()
            }
            .into());
        }
        key.key_class = Some(key_class.canonical_name.clone());
        Ok(key)
    }

    /// Parse key fields declared directly on the entity class.
    ///
    /// A key with a single component is returned as is; the caller decides
    /// whether it is a simple key.
    ///
    /// # Errors
    ///
    /// Same as [`CompoundKeyParser::parse`], minus the component count.
    pub fn parse_inline(ctx: &EntityContext<'_>) -> Result<CompoundKey> {
        Self::parse_components(ctx, ctx.class())
    }

    fn parse_components(ctx: &EntityContext<'_>, class: &ClassMeta) -> Result<CompoundKey> {
        let dialect = OrderingDialect::determine(class)?;
        let ordering = dialect.extract_components_ordering(class)?;

        let components = ordering
            .partition
            .iter()
            .map(|component| parse_component(ctx, class, component, KeyPart::Partition))
            .collect::<Result<Vec<_>>>()?;
        let clustering = ordering
            .clustering
            .iter()
            .map(|component| {
                parse_component(ctx, class, component, KeyPart::Clustering).map(|property| {
                    ClusteringComponent {
                        property,
                        order: component.clustering_order
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let key = CompoundKey {
            key_class:  None,
            partition:  PartitionComponents {
                components
            },
            clustering: ClusteringComponents {
                components: clustering
            }
        };

        debug!(
            class = %class.canonical_name,
            ?dialect,
            partition = ?key.partition().column_names(),
            clustering = ?key.clustering().column_names(),
            "compound key parsed"
        );
        Ok(key)
    }
}

fn parse_component(
    ctx: &EntityContext<'_>,
    owner: &ClassMeta,
    component: &OrderedComponent<'_>,
    part: KeyPart
) -> Result<PropertyDescriptor> {
    let field = component.field.field;
    let redirected = field.annotations.is_json() || field.annotations.codec().is_some();
    let counter = matches!(field.ty.kind, TypeKind::Counter) || field.annotations.is_counter();

    if counter || (field.ty.kind.is_collection() && !redirected) {
        let kind = if counter { "counter" } else { field.ty.kind.label() };
        return Err(MappingError::InvalidKeyComponent {
            class: component.field.declaring_class.canonical_name.clone(),
            field: field.name.clone(),
            kind,
            part
        }
        .into());
    }

    let property_ctx = ctx.property(owner, component.field, PropertyRole::Component(part));
    PropertyParser::parse(&property_ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::MapperConfig,
        descriptor::{ClusteringOrder, PropertyType},
        error::Error,
        meta::{Annotation, FieldMeta, NativeType, TypeRef}
    };

    fn config() -> MapperConfig {
        MapperConfig::builder().keyspace("ks").build()
    }

    fn entity() -> ClassMeta {
        ClassMeta::new("app::Event")
    }

    fn field(name: &str, ty: NativeType) -> FieldMeta {
        FieldMeta::new(name, TypeRef::native(ty))
    }

    fn partition(order: i32) -> Annotation {
        Annotation::PartitionKey {
            order: Some(order)
        }
    }

    fn clustering(order: i32, reversed: bool) -> Annotation {
        Annotation::ClusteringColumn {
            order,
            reversed
        }
    }

    fn mapping_err(result: Result<CompoundKey>) -> MappingError {
        match result {
            Err(Error::Mapping(err)) => err,
            other => panic!("expected mapping error, got {other:?}")
        }
    }

    #[test]
    fn embedded_key_with_clustering_order() {
        let key_class = ClassMeta::new("app::EventKey")
            .annotated(Annotation::Naming(crate::naming::NamingStrategy::SnakeCase))
            .field(field("userId", NativeType::BigInt).annotated(partition(1)))
            .field(field("time", NativeType::Uuid).annotated(clustering(1, true)))
            .field(field("type", NativeType::Text).annotated(clustering(2, false)));
        let config = config();
        let entity = entity();
        let ctx = EntityContext::new(&entity, &config).unwrap();

        let key = CompoundKeyParser::parse(&ctx, &key_class).unwrap();
        assert_eq!(key.key_class(), Some("app::EventKey"));
        assert_eq!(key.partition().column_names(), ["user_id"]);
        assert_eq!(key.clustering().names(), ["time", "type"]);
        assert_eq!(
            key.clustering().orders(),
            [ClusteringOrder::Desc, ClusteringOrder::Asc]
        );
        assert!(key.properties().all(|p| p.property_type() == PropertyType::Id));
        assert_eq!(key.partition().components()[0].declaring_class(), "app::EventKey");
    }

    #[test]
    fn embedded_key_needs_two_components() {
        let key_class =
            ClassMeta::new("app::SoloKey").field(field("id", NativeType::BigInt).annotated(partition(1)));
        let config = config();
        let entity = entity();
        let ctx = EntityContext::new(&entity, &config).unwrap();

        assert_eq!(
            mapping_err(CompoundKeyParser::parse(&ctx, &key_class)),
            MappingError::TooFewComponents {
                class: "app::SoloKey".into(),
                found: 1
            }
        );
    }

    #[test]
    fn collection_component_is_rejected() {
        let key_class = ClassMeta::new("app::TagKey")
            .field(field("id", NativeType::BigInt).annotated(partition(1)))
            .field(
                FieldMeta::new("tags", TypeRef::list(TypeRef::native(NativeType::Text)))
                    .annotated(partition(2))
            );
        let config = config();
        let entity = entity();
        let ctx = EntityContext::new(&entity, &config).unwrap();

        let err = mapping_err(CompoundKeyParser::parse(&ctx, &key_class));
        assert_eq!(
            err,
            MappingError::InvalidKeyComponent {
                class: "app::TagKey".into(),
                field: "tags".into(),
                kind:  "list",
                part:  KeyPart::Partition
            }
        );
        assert!(err.to_string().contains("cannot be a list because it belongs to the partition key"));
    }

    #[test]
    fn json_collection_component_is_allowed() {
        let key_class = ClassMeta::new("app::TagKey")
            .field(field("id", NativeType::BigInt).annotated(partition(1)))
            .field(
                FieldMeta::new("tags", TypeRef::list(TypeRef::native(NativeType::Text)))
                    .annotated(clustering(1, false))
                    .annotated(Annotation::Json)
            );
        let config = config();
        let entity = entity();
        let ctx = EntityContext::new(&entity, &config).unwrap();
        assert!(CompoundKeyParser::parse(&ctx, &key_class).is_ok());
    }

    #[test]
    fn counter_component_is_rejected() {
        let key_class = ClassMeta::new("app::HitKey")
            .field(field("id", NativeType::BigInt).annotated(partition(1)))
            .field(FieldMeta::new("hits", TypeRef::counter()).annotated(clustering(1, false)));
        let config = config();
        let entity = entity();
        let ctx = EntityContext::new(&entity, &config).unwrap();

        assert!(matches!(
            mapping_err(CompoundKeyParser::parse(&ctx, &key_class)),
            MappingError::InvalidKeyComponent {
                kind: "counter",
                part: KeyPart::Clustering,
                ..
            }
        ));
    }

    #[test]
    fn inline_key_on_entity() {
        let entity = entity()
            .field(field("userId", NativeType::BigInt).annotated(partition(1)))
            .field(field("time", NativeType::Uuid).annotated(clustering(1, false)))
            .field(field("payload", NativeType::Text));
        let config = config();
        let ctx = EntityContext::new(&entity, &config).unwrap();

        let key = CompoundKeyParser::parse_inline(&ctx).unwrap();
        assert_eq!(key.key_class(), None);
        assert_eq!(key.len(), 2);
        assert_eq!(key.partition().names(), ["userId"]);
    }

    #[test]
    fn ordering_errors_name_key_class() {
        let key_class = ClassMeta::new("app::BadKey")
            .field(field("a", NativeType::BigInt).annotated(partition(1)))
            .field(field("b", NativeType::Text).annotated(Annotation::Order {
                value:    2,
                reversed: false
            }));
        let config = config();
        let entity = entity();
        let ctx = EntityContext::new(&entity, &config).unwrap();

        assert_eq!(
            mapping_err(CompoundKeyParser::parse(&ctx, &key_class)).class_name(),
            "app::BadKey"
        );
    }
}
