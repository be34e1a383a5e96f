// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parsing contexts.

use tracing::debug;

use crate::{
    config::{ConsistencyLevel, InsertStrategy, MapperConfig},
    error::{KeyPart, MappingError},
    meta::{AnnotationsExt, ClassMeta, DeclaredField},
    naming::NamingStrategy
};

/// Entity-wide settings resolved before any field is parsed.
///
/// | Setting | Resolution |
/// |---------|------------|
/// | keyspace | class annotation > configuration > error |
/// | table | class annotation > naming strategy on the simple name |
/// | naming | class annotation > configuration |
/// | consistency, insert | table override > class annotation > configuration |
/// | schema update | table override > configuration |
#[derive(Debug, Clone)]
pub struct EntityContext<'a> {
    class:             &'a ClassMeta,
    config:            &'a MapperConfig,
    keyspace:          String,
    table:             String,
    naming:            NamingStrategy,
    read_consistency:  ConsistencyLevel,
    write_consistency: ConsistencyLevel,
    insert_strategy:   InsertStrategy,
    schema_update:     bool
}

impl<'a> EntityContext<'a> {
    /// Resolve the entity settings of `class`.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::MissingKeyspace`] when neither the class nor
    /// the configuration names a keyspace.
    pub fn new(class: &'a ClassMeta, config: &'a MapperConfig) -> Result<Self, MappingError> {
        let (explicit_keyspace, explicit_table) = class.annotations.entity().unwrap_or_default();
        let naming = class.annotations.naming().unwrap_or(config.naming());

        let keyspace = explicit_keyspace
            .filter(|k| !k.is_empty())
            .or(config.keyspace())
            .ok_or_else(|| MappingError::MissingKeyspace {
                class: class.canonical_name.clone()
            })?
            .to_string();
        let table = explicit_table
            .filter(|t| !t.is_empty())
            .map_or_else(|| naming.apply(&class.simple_name), str::to_string);

        let table_override = config.table_override(&format!("{keyspace}.{table}"));
        let (class_read, class_write) = class.annotations.consistency().unwrap_or_default();

        let read_consistency = table_override
            .and_then(|o| o.read_consistency)
            .or(class_read)
            .unwrap_or(config.read_consistency());
        let write_consistency = table_override
            .and_then(|o| o.write_consistency)
            .or(class_write)
            .unwrap_or(config.write_consistency());
        let insert_strategy = table_override
            .and_then(|o| o.insert_strategy)
            .or(class.annotations.insert_strategy())
            .unwrap_or(config.insert_strategy());
        let schema_update = table_override
            .and_then(|o| o.schema_update)
            .unwrap_or(config.schema_update());

        debug!(
            class = %class.canonical_name,
            keyspace = %keyspace,
            table = %table,
            ?naming,
            %read_consistency,
            %write_consistency,
            "entity context resolved"
        );

        Ok(Self {
            class,
            config,
            keyspace,
            table,
            naming,
            read_consistency,
            write_consistency,
            insert_strategy,
            schema_update
        })
    }

    /// Entity class.
    #[must_use]
    pub fn class(&self) -> &'a ClassMeta {
        self.class
    }

    /// Mapper configuration.
    #[must_use]
    pub fn config(&self) -> &'a MapperConfig {
        self.config
    }

    /// Resolved keyspace.
    #[must_use]
    pub fn keyspace(&self) -> &str {
        &self.keyspace
    }

    /// Resolved table name.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Entity naming strategy.
    #[must_use]
    pub fn naming(&self) -> NamingStrategy {
        self.naming
    }

    /// Default read consistency of the entity.
    #[must_use]
    pub fn read_consistency(&self) -> ConsistencyLevel {
        self.read_consistency
    }

    /// Default write consistency of the entity.
    #[must_use]
    pub fn write_consistency(&self) -> ConsistencyLevel {
        self.write_consistency
    }

    /// Insert strategy.
    #[must_use]
    pub fn insert_strategy(&self) -> InsertStrategy {
        self.insert_strategy
    }

    /// Whether schema updates are allowed.
    #[must_use]
    pub fn schema_update(&self) -> bool {
        self.schema_update
    }

    /// Context for a field of `owner`, the entity or its embedded key class.
    #[must_use]
    pub fn property<'c>(
        &'c self,
        owner: &'c ClassMeta,
        field: DeclaredField<'c>,
        role: PropertyRole
    ) -> PropertyContext<'c> {
        PropertyContext {
            entity: self,
            owner,
            field,
            role
        }
    }
}

/// Role a field plays in the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyRole {
    /// Regular, counter or static column.
    Regular,
    /// Single-column primary key.
    Id,
    /// Field holding the embedded key.
    EmbeddedId,
    /// Compound key component.
    Component(KeyPart)
}

/// Everything the property parser needs for one field.
#[derive(Debug, Clone, Copy)]
pub struct PropertyContext<'a> {
    /// Enclosing entity.
    pub entity: &'a EntityContext<'a>,
    /// Class whose fields are being parsed; accessors are looked up on it.
    pub owner:  &'a ClassMeta,
    /// The field and its declaring class.
    pub field:  DeclaredField<'a>,
    /// Role of the field.
    pub role:   PropertyRole
}

impl PropertyContext<'_> {
    /// Naming strategy of the owning class, defaulting to the entity's.
    #[must_use]
    pub fn naming(&self) -> NamingStrategy {
        self.owner
            .annotations
            .naming()
            .unwrap_or(self.entity.naming)
    }

    /// Canonical name of the declaring class.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.field.declaring_class.canonical_name
    }

    /// Field name.
    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field.field.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::TableOverride, meta::Annotation};

    fn entity(annotations: Vec<Annotation>) -> ClassMeta {
        let mut class = ClassMeta::new("app::model::UserProfile");
        class.annotations = annotations;
        class
    }

    #[test]
    fn keyspace_from_annotation_wins() {
        let class = entity(vec![Annotation::Entity {
            keyspace: Some("explicit".into()),
            table:    None
        }]);
        let config = MapperConfig::builder().keyspace("configured").build();
        let ctx = EntityContext::new(&class, &config).unwrap();
        assert_eq!(ctx.keyspace(), "explicit");
    }

    #[test]
    fn keyspace_from_configuration() {
        let class = entity(vec![]);
        let config = MapperConfig::builder().keyspace("configured").build();
        let ctx = EntityContext::new(&class, &config).unwrap();
        assert_eq!(ctx.keyspace(), "configured");
    }

    #[test]
    fn missing_keyspace_fails() {
        let class = entity(vec![]);
        let config = MapperConfig::default();
        assert_eq!(
            EntityContext::new(&class, &config).unwrap_err(),
            MappingError::MissingKeyspace {
                class: "app::model::UserProfile".into()
            }
        );
    }

    #[test]
    fn table_defaults_to_named_simple_name() {
        let config = MapperConfig::builder().keyspace("ks").build();

        let lower = entity(vec![]);
        assert_eq!(EntityContext::new(&lower, &config).unwrap().table(), "userprofile");

        let snake = entity(vec![Annotation::Naming(NamingStrategy::SnakeCase)]);
        assert_eq!(EntityContext::new(&snake, &config).unwrap().table(), "user_profile");

        let explicit = entity(vec![Annotation::Entity {
            keyspace: None,
            table:    Some("profiles".into())
        }]);
        assert_eq!(EntityContext::new(&explicit, &config).unwrap().table(), "profiles");
    }

    #[test]
    fn table_override_beats_class_annotation() {
        let class = entity(vec![
            Annotation::Entity {
                keyspace: Some("ks".into()),
                table:    Some("profiles".into())
            },
            Annotation::Consistency {
                read:  Some(ConsistencyLevel::Quorum),
                write: Some(ConsistencyLevel::Quorum)
            },
            Annotation::Insert(InsertStrategy::NotNullFields)
        ]);
        let config = MapperConfig::builder()
            .read_consistency(ConsistencyLevel::One)
            .table_override("ks.profiles", TableOverride {
                read_consistency: Some(ConsistencyLevel::LocalOne),
                insert_strategy: Some(InsertStrategy::AllFields),
                schema_update: Some(true),
                ..TableOverride::default()
            })
            .build();

        let ctx = EntityContext::new(&class, &config).unwrap();
        assert_eq!(ctx.read_consistency(), ConsistencyLevel::LocalOne);
        assert_eq!(ctx.write_consistency(), ConsistencyLevel::Quorum);
        assert_eq!(ctx.insert_strategy(), InsertStrategy::AllFields);
        assert!(ctx.schema_update());
    }

    #[test]
    fn configuration_defaults_apply_last() {
        let class = entity(vec![]);
        let config = MapperConfig::builder()
            .keyspace("ks")
            .write_consistency(ConsistencyLevel::EachQuorum)
            .insert_strategy(InsertStrategy::NotNullFields)
            .build();
        let ctx = EntityContext::new(&class, &config).unwrap();
        assert_eq!(ctx.read_consistency(), ConsistencyLevel::One);
        assert_eq!(ctx.write_consistency(), ConsistencyLevel::EachQuorum);
        assert_eq!(ctx.insert_strategy(), InsertStrategy::NotNullFields);
        assert!(!ctx.schema_update());
    }
}
