// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mapper facade.
//!
//! [`Mapper`] owns a [`MapperConfig`] and an [`EntityCache`] and hands out
//! shared descriptors:
//!
//! ```rust
//! use cqlmap_core::{
//!     Mapper, MapperConfig,
//!     meta::{Annotation, ClassMeta, FieldMeta, NativeType, TypeRef}
//! };
//!
//! let user = ClassMeta::new("app::User")
//!     .field(FieldMeta::new("id", TypeRef::native(NativeType::Uuid)).annotated(Annotation::Id));
//!
//! let mapper = Mapper::new(MapperConfig::builder().keyspace("app").build());
//! let entity = mapper.entity_for(&user).unwrap();
//! assert_eq!(entity.qualified_table_name(), "app.user");
//! ```

use std::sync::Arc;

use crate::{
    cache::EntityCache,
    config::MapperConfig,
    descriptor::EntityDescriptor,
    error::Result,
    explorer::EntityExplorer,
    meta::{ClassMeta, MappedClass}
};

/// Entry point resolving entity descriptors.
#[derive(Debug, Default)]
pub struct Mapper {
    config: MapperConfig,
    cache:  EntityCache
}

impl Mapper {
    /// Mapper with an empty cache.
    #[must_use]
    pub fn new(config: MapperConfig) -> Self {
        Self {
            config,
            cache: EntityCache::new()
        }
    }

    /// Configuration.
    #[must_use]
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Descriptor cache.
    #[must_use]
    pub fn cache(&self) -> &EntityCache {
        &self.cache
    }

    /// Descriptor of a derived entity type.
    ///
    /// # Errors
    ///
    /// Returns the parse error of the entity.
    pub fn entity<T: MappedClass>(&self) -> Result<Arc<EntityDescriptor>> {
        self.entity_for(&T::class_meta())
    }

    /// Descriptor of `class`.
    ///
    /// # Errors
    ///
    /// Returns the parse error of the entity.
    pub fn entity_for(&self, class: &ClassMeta) -> Result<Arc<EntityDescriptor>> {
        self.cache.get_or_parse(class, &self.config)
    }

    /// Parse every entity `explorer` discovers among `candidates`.
    ///
    /// # Errors
    ///
    /// Stops at the first entity that fails to parse.
    pub fn parse_all<'a, I>(&self, explorer: &EntityExplorer, candidates: I) -> Result<Vec<Arc<EntityDescriptor>>>
    where
        I: IntoIterator<Item = &'a ClassMeta>
    {
        explorer
            .discover(candidates)
            .into_iter()
            .map(|class| self.entity_for(class))
            .collect()
    }
}
